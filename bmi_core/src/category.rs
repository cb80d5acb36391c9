//! Fixed BMI category table.
//!
//! The bands are half-open and cover `[0, ∞)` without gaps or overlaps:
//!
//! | Category    | Band           |
//! |-------------|----------------|
//! | Underweight | `[0, 18.5)`    |
//! | Normal      | `[18.5, 25)`   |
//! | Overweight  | `[25, 30)`     |
//! | Obese       | `[30, ∞)`      |

use crate::Category;

/// Lower bound of the Normal band
pub const NORMAL_MIN: f64 = 18.5;
/// Lower bound of the Overweight band
pub const OVERWEIGHT_MIN: f64 = 25.0;
/// Lower bound of the Obese band
pub const OBESE_MIN: f64 = 30.0;

/// One row of the category table
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryBand {
    pub category: Category,
    /// Inclusive lower bound
    pub min: f64,
    /// Exclusive upper bound, `None` for the open-ended top band
    pub max: Option<f64>,
}

impl CategoryBand {
    pub fn contains(&self, bmi: f64) -> bool {
        bmi >= self.min && self.max.map_or(true, |max| bmi < max)
    }
}

const BANDS: [CategoryBand; 4] = [
    CategoryBand {
        category: Category::Underweight,
        min: 0.0,
        max: Some(NORMAL_MIN),
    },
    CategoryBand {
        category: Category::Normal,
        min: NORMAL_MIN,
        max: Some(OVERWEIGHT_MIN),
    },
    CategoryBand {
        category: Category::Overweight,
        min: OVERWEIGHT_MIN,
        max: Some(OBESE_MIN),
    },
    CategoryBand {
        category: Category::Obese,
        min: OBESE_MIN,
        max: None,
    },
];

/// The category table, lowest band first
pub fn bands() -> &'static [CategoryBand] {
    &BANDS
}

impl Category {
    /// Classify an unrounded BMI value
    ///
    /// Values below zero never come out of the evaluator; they fall into
    /// Underweight along with the rest of the bottom band.
    pub fn from_bmi(bmi: f64) -> Category {
        if bmi < NORMAL_MIN {
            Category::Underweight
        } else if bmi < OVERWEIGHT_MIN {
            Category::Normal
        } else if bmi < OBESE_MIN {
            Category::Overweight
        } else {
            Category::Obese
        }
    }

    /// Health recommendation shown alongside this category
    pub fn recommendation(&self) -> &'static str {
        match self {
            Category::Underweight => {
                "Consider eating a balanced diet with more calories and engage in strength training exercises."
            }
            Category::Normal => {
                "Maintain your healthy weight through a balanced diet and regular physical activity."
            }
            Category::Overweight => {
                "Incorporate regular exercise and a balanced diet with fewer high-calorie foods."
            }
            Category::Obese => {
                "Consult with a healthcare provider to discuss potential weight loss strategies through diet and exercise."
            }
        }
    }

    /// The table row for this category
    pub fn band(&self) -> &'static CategoryBand {
        // BANDS is ordered like Category::ALL
        &BANDS[*self as usize]
    }
}
