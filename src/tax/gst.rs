//! GST (Goods and Services Tax) rules for Indian invoicing: rate splits,
//! supply type, standard slabs, and GSTIN handling

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Whether a supply stays inside one state or crosses state lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplyType {
    /// Supplier and customer share a state code: CGST + SGST
    IntraState,
    /// Supplier and customer state codes differ: IGST
    InterState,
}

impl SupplyType {
    /// Classify a supply from the two state codes.
    ///
    /// The comparison is a strict, case-sensitive string inequality; codes are
    /// not trimmed or normalised.
    pub fn from_state_codes(supplier_state_code: &str, customer_state_code: &str) -> Self {
        if supplier_state_code != customer_state_code {
            SupplyType::InterState
        } else {
            SupplyType::IntraState
        }
    }

    pub fn from_inter_state(is_inter_state: bool) -> Self {
        if is_inter_state {
            SupplyType::InterState
        } else {
            SupplyType::IntraState
        }
    }

    pub fn is_inter_state(&self) -> bool {
        matches!(self, SupplyType::InterState)
    }
}

/// GST rate structure for Indian taxation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstRate {
    /// Combined GST rate percentage (e.g., 18 for 18%)
    pub total_rate: BigDecimal,
    /// CGST rate percentage (Central GST)
    pub cgst_rate: BigDecimal,
    /// SGST rate percentage (State GST)
    pub sgst_rate: BigDecimal,
    /// IGST rate percentage (Integrated GST)
    pub igst_rate: BigDecimal,
}

impl GstRate {
    /// Intra-state rates: the combined rate split evenly into CGST and SGST
    pub fn intra_state(total_rate: BigDecimal) -> Self {
        let half_rate = &total_rate / BigDecimal::from(2);
        Self {
            total_rate,
            cgst_rate: half_rate.clone(),
            sgst_rate: half_rate,
            igst_rate: BigDecimal::from(0),
        }
    }

    /// Inter-state rates: the full combined rate as IGST
    pub fn inter_state(total_rate: BigDecimal) -> Self {
        Self {
            total_rate: total_rate.clone(),
            cgst_rate: BigDecimal::from(0),
            sgst_rate: BigDecimal::from(0),
            igst_rate: total_rate,
        }
    }

    /// Split a combined rate according to the supply type
    pub fn for_supply(total_rate: BigDecimal, supply_type: SupplyType) -> Self {
        match supply_type {
            SupplyType::IntraState => Self::intra_state(total_rate),
            SupplyType::InterState => Self::inter_state(total_rate),
        }
    }
}

/// Tax amounts produced by applying a [`GstRate`] to a taxable amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstCalculation {
    /// Amount the rate was applied to
    pub taxable_amount: BigDecimal,
    pub cgst_amount: BigDecimal,
    pub sgst_amount: BigDecimal,
    pub igst_amount: BigDecimal,
    /// CGST + SGST + IGST
    pub total_gst_amount: BigDecimal,
}

impl GstCalculation {
    /// Calculate GST amounts from a taxable amount and a rate split
    pub fn calculate(taxable_amount: BigDecimal, gst_rate: &GstRate) -> Self {
        let hundred = BigDecimal::from(100);
        let cgst_amount = (&taxable_amount * &gst_rate.cgst_rate) / &hundred;
        let sgst_amount = (&taxable_amount * &gst_rate.sgst_rate) / &hundred;
        let igst_amount = (&taxable_amount * &gst_rate.igst_rate) / &hundred;
        let total_gst_amount = &cgst_amount + &sgst_amount + &igst_amount;

        Self {
            taxable_amount,
            cgst_amount,
            sgst_amount,
            igst_amount,
            total_gst_amount,
        }
    }
}

/// Standard GST slabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GstCategory {
    /// Essential items (food grains, medicines, etc.) - 0%
    Essential,
    /// Reduced rate items - 5%
    Reduced,
    /// Standard rate items - 12%
    Standard,
    /// Higher rate items, most services - 18%
    Higher,
    /// Luxury/Sin goods - 28%
    Luxury,
}

impl GstCategory {
    pub const ALL: [GstCategory; 5] = [
        GstCategory::Essential,
        GstCategory::Reduced,
        GstCategory::Standard,
        GstCategory::Higher,
        GstCategory::Luxury,
    ];

    /// Combined GST rate for this slab
    pub fn rate(&self) -> BigDecimal {
        match self {
            GstCategory::Essential => BigDecimal::from(0),
            GstCategory::Reduced => BigDecimal::from(5),
            GstCategory::Standard => BigDecimal::from(12),
            GstCategory::Higher => BigDecimal::from(18),
            GstCategory::Luxury => BigDecimal::from(28),
        }
    }

    /// Find the slab whose combined rate equals `rate`, if any
    pub fn from_rate(rate: &BigDecimal) -> Option<Self> {
        Self::ALL.into_iter().find(|category| &category.rate() == rate)
    }

    pub fn rate_for(&self, supply_type: SupplyType) -> GstRate {
        GstRate::for_supply(self.rate(), supply_type)
    }
}

const GSTIN_LEN: usize = 15;
const GSTIN_CHARSET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Check the shape of a GSTIN without verifying its checksum.
///
/// Layout: 2-digit state code, 10-character PAN (5 letters, 4 digits,
/// 1 letter), entity number `[1-9A-Z]`, literal `Z`, checksum `[0-9A-Z]`.
pub fn validate_gstin_format(gstin: &str) -> Result<(), GstError> {
    let bytes = gstin.as_bytes();
    if bytes.len() != GSTIN_LEN {
        return Err(GstError::InvalidGstin(format!(
            "{} must be {} characters long",
            gstin, GSTIN_LEN
        )));
    }

    let shape_ok = bytes[0..2].iter().all(u8::is_ascii_digit)
        && bytes[2..7].iter().all(u8::is_ascii_uppercase)
        && bytes[7..11].iter().all(u8::is_ascii_digit)
        && bytes[11].is_ascii_uppercase()
        && (bytes[12].is_ascii_uppercase() || (b'1'..=b'9').contains(&bytes[12]))
        && bytes[13] == b'Z'
        && (bytes[14].is_ascii_uppercase() || bytes[14].is_ascii_digit());

    if !shape_ok {
        return Err(GstError::InvalidGstin(format!(
            "{} does not match the GSTIN layout",
            gstin
        )));
    }

    let state_code = &gstin[0..2];
    if state_name(state_code).is_none() {
        return Err(GstError::UnknownStateCode(state_code.to_string()));
    }

    Ok(())
}

/// Compute the mod-36 check character for the first 14 characters of a GSTIN
pub fn gstin_check_char(gstin: &str) -> Option<char> {
    let body = gstin.as_bytes().get(..GSTIN_LEN - 1)?;
    let mut sum: u32 = 0;
    for (i, byte) in body.iter().enumerate() {
        let value = GSTIN_CHARSET.iter().position(|c| c == byte)? as u32;
        let factor = if i % 2 == 0 { 1 } else { 2 };
        let product = value * factor;
        sum += product / 36 + product % 36;
    }
    let check = ((36 - sum % 36) % 36) as usize;
    Some(GSTIN_CHARSET[check] as char)
}

/// Validate a GSTIN's layout, state code and checksum
pub fn validate_gstin(gstin: &str) -> Result<(), GstError> {
    validate_gstin_format(gstin)?;

    let expected = gstin_check_char(gstin)
        .ok_or_else(|| GstError::InvalidGstin(gstin.to_string()))?;
    let actual = gstin.chars().last().unwrap_or_default();
    if expected != actual {
        return Err(GstError::ChecksumMismatch {
            gstin: gstin.to_string(),
            expected,
        });
    }

    Ok(())
}

/// Leading two-digit state code of a GSTIN that passes [`validate_gstin_format`]
pub fn state_code_from_gstin(gstin: &str) -> Result<&str, GstError> {
    validate_gstin_format(gstin)?;
    Ok(&gstin[0..2])
}

/// State or union territory name for a GST state code
pub fn state_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "01" => "Jammu and Kashmir",
        "02" => "Himachal Pradesh",
        "03" => "Punjab",
        "04" => "Chandigarh",
        "05" => "Uttarakhand",
        "06" => "Haryana",
        "07" => "Delhi",
        "08" => "Rajasthan",
        "09" => "Uttar Pradesh",
        "10" => "Bihar",
        "11" => "Sikkim",
        "12" => "Arunachal Pradesh",
        "13" => "Nagaland",
        "14" => "Manipur",
        "15" => "Mizoram",
        "16" => "Tripura",
        "17" => "Meghalaya",
        "18" => "Assam",
        "19" => "West Bengal",
        "20" => "Jharkhand",
        "21" => "Odisha",
        "22" => "Chhattisgarh",
        "23" => "Madhya Pradesh",
        "24" => "Gujarat",
        "26" => "Dadra and Nagar Haveli and Daman and Diu",
        "27" => "Maharashtra",
        "29" => "Karnataka",
        "30" => "Goa",
        "31" => "Lakshadweep",
        "32" => "Kerala",
        "33" => "Tamil Nadu",
        "34" => "Puducherry",
        "35" => "Andaman and Nicobar Islands",
        "36" => "Telangana",
        "37" => "Andhra Pradesh",
        "38" => "Ladakh",
        "97" => "Other Territory",
        _ => return None,
    };
    Some(name)
}

/// GST-related errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GstError {
    #[error("Invalid GSTIN: {0}")]
    InvalidGstin(String),
    #[error("GSTIN {gstin} has a bad check character, expected {expected}")]
    ChecksumMismatch { gstin: String, expected: char },
    #[error("Unknown GST state code: {0}")]
    UnknownStateCode(String),
}
