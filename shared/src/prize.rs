use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::WheelError;

const DEFAULT_SLICE_COLOR: &str = "#FF5252";
const DEFAULT_TEXT_COLOR: &str = "#ffffff";

fn default_slice_color() -> String {
    DEFAULT_SLICE_COLOR.to_string()
}

fn default_text_color() -> String {
    DEFAULT_TEXT_COLOR.to_string()
}

/// A single prize on the wheel. Only `id` and `weight` matter to the draw;
/// the rest is for display.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Prize {
    pub id: u32,
    pub label: String,
    pub weight: f64,
    #[serde(default = "default_slice_color")]
    pub color: String,
    #[serde(default = "default_text_color", rename = "textColor", alias = "text_color")]
    pub text_color: String,
}

impl Prize {
    pub fn new(id: u32, label: impl Into<String>, weight: f64) -> Self {
        Self {
            id,
            label: label.into(),
            weight,
            color: default_slice_color(),
            text_color: default_text_color(),
        }
    }

    pub fn with_colors(mut self, color: &str, text_color: &str) -> Self {
        self.color = color.to_string();
        self.text_color = text_color.to_string();
        self
    }
}

/// Ordered, validated prize catalog. Position in the sequence is the prize's
/// slot on the wheel, slot 0 starting at the top and proceeding clockwise.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct PrizeSet {
    prizes: Vec<Prize>,
}

impl PrizeSet {
    pub fn new(prizes: Vec<Prize>) -> Result<Self, WheelError> {
        validate_prizes(&prizes)?;
        Ok(Self { prizes })
    }

    /// Loads a catalog from a JSON array of prizes.
    pub fn from_json(json: &str) -> Result<Self, WheelError> {
        let prizes: Vec<Prize> = serde_json::from_str(json)?;
        Self::new(prizes)
    }

    /// The promotional catalog the widget ships with (weights sum to 100).
    pub fn default_catalog() -> Self {
        Self {
            prizes: vec![
                Prize::new(1, "Voucher 50K", 20.0).with_colors("#FF5252", "#ffffff"),
                Prize::new(2, "Mũ Bảo Hiểm", 5.0).with_colors("#FFB142", "#ffffff"),
                Prize::new(3, "Chúc May Mắn", 40.0).with_colors("#2CCCE4", "#ffffff"),
                Prize::new(4, "Voucher 100K", 10.0).with_colors("#33D9B2", "#ffffff"),
                Prize::new(5, "Áo Mưa", 5.0).with_colors("#706FD3", "#ffffff"),
                Prize::new(6, "Thêm Lượt", 10.0).with_colors("#FF793F", "#ffffff"),
                Prize::new(7, "Voucher 200K", 5.0).with_colors("#FF5252", "#ffffff"),
                Prize::new(8, "Balo", 5.0).with_colors("#33D9B2", "#ffffff"),
            ],
        }
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        total_weight(&self.prizes)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Prize> {
        self.prizes.iter()
    }
}

pub fn total_weight(prizes: &[Prize]) -> f64 {
    prizes.iter().map(|p| p.weight).sum()
}

/// Wheel slot of `prize`. Prizes are identified by id alone, so a copy with
/// different display fields still finds its slot.
pub fn slot_of(prizes: &[Prize], prize: &Prize) -> Option<usize> {
    prizes.iter().position(|p| p.id == prize.id)
}

/// Checks everything the draw and rotation math rely on.
pub fn validate_prizes(prizes: &[Prize]) -> Result<(), WheelError> {
    if prizes.is_empty() {
        return Err(WheelError::InvalidConfiguration("prize set is empty".to_string()));
    }

    let mut seen = HashSet::with_capacity(prizes.len());
    for prize in prizes {
        if !prize.weight.is_finite() || prize.weight < 0.0 {
            return Err(WheelError::InvalidConfiguration(format!(
                "prize {} has invalid weight {}",
                prize.id, prize.weight
            )));
        }
        if !seen.insert(prize.id) {
            return Err(WheelError::InvalidConfiguration(format!(
                "duplicate prize id {}",
                prize.id
            )));
        }
    }

    if !prizes.iter().any(|p| p.weight > 0.0) {
        return Err(WheelError::InvalidConfiguration(
            "at least one prize needs a positive weight".to_string(),
        ));
    }

    let total = total_weight(prizes);
    if !total.is_finite() {
        return Err(WheelError::InvalidConfiguration(format!(
            "prize weights add up to {}",
            total
        )));
    }

    Ok(())
}
