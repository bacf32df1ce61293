//! Expression vocabulary and weight vector

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of canonical expression classes
pub const EXPRESSION_DIM: usize = 8;

/// The eight canonical expression classes
///
/// Ordering is fixed: downstream consumers depend on these names and their
/// semantics staying stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    Happy,
    Sad,
    Thinking,
    Surprised,
    Confused,
    Angry,
    Neutral,
    Talking,
}

impl Expression {
    /// All expressions in canonical order
    pub const ALL: [Expression; EXPRESSION_DIM] = [
        Expression::Happy,
        Expression::Sad,
        Expression::Thinking,
        Expression::Surprised,
        Expression::Confused,
        Expression::Angry,
        Expression::Neutral,
        Expression::Talking,
    ];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Expression::Happy => "happy",
            Expression::Sad => "sad",
            Expression::Thinking => "thinking",
            Expression::Surprised => "surprised",
            Expression::Confused => "confused",
            Expression::Angry => "angry",
            Expression::Neutral => "neutral",
            Expression::Talking => "talking",
        }
    }

    /// Look up an expression by name, case-insensitive
    pub fn from_name(name: &str) -> Option<Expression> {
        match name.to_ascii_lowercase().as_str() {
            "happy" => Some(Expression::Happy),
            "sad" => Some(Expression::Sad),
            "thinking" => Some(Expression::Thinking),
            "surprised" => Some(Expression::Surprised),
            "confused" => Some(Expression::Confused),
            "angry" => Some(Expression::Angry),
            "neutral" => Some(Expression::Neutral),
            "talking" => Some(Expression::Talking),
            _ => None,
        }
    }

    /// Slot index in an [`ExpressionVector`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Fixed 8-slot weight vector over the expression classes
///
/// Invariant (maintained by the merger): every slot in [0, 1], sum ≤ 1 + ε.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExpressionVector([f64; EXPRESSION_DIM]);

impl ExpressionVector {
    /// All-zero vector
    pub fn zero() -> Self {
        Self::default()
    }

    /// Sum of all slots
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Divide every slot by `divisor`
    pub fn scale_down(&mut self, divisor: f64) {
        for w in &mut self.0 {
            *w /= divisor;
        }
    }

    /// Raise a slot to at least `value`
    pub fn raise(&mut self, expression: Expression, value: f64) {
        let slot = &mut self.0[expression.index()];
        if value > *slot {
            *slot = value;
        }
    }

    /// Slots in canonical order
    pub fn as_slice(&self) -> &[f64; EXPRESSION_DIM] {
        &self.0
    }
}

impl Index<Expression> for ExpressionVector {
    type Output = f64;

    fn index(&self, expression: Expression) -> &f64 {
        &self.0[expression.index()]
    }
}

impl IndexMut<Expression> for ExpressionVector {
    fn index_mut(&mut self, expression: Expression) -> &mut f64 {
        &mut self.0[expression.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_order_is_stable() {
        let names: Vec<&str> = Expression::ALL.iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            [
                "happy",
                "sad",
                "thinking",
                "surprised",
                "confused",
                "angry",
                "neutral",
                "talking"
            ]
        );
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(Expression::from_name("HAPPY"), Some(Expression::Happy));
        assert_eq!(Expression::from_name("Thinking"), Some(Expression::Thinking));
        assert_eq!(Expression::from_name("smug"), None);
    }

    #[test]
    fn test_raise_never_lowers() {
        let mut v = ExpressionVector::zero();
        v[Expression::Happy] = 0.7;
        v.raise(Expression::Happy, 0.3);
        assert_eq!(v[Expression::Happy], 0.7);
        v.raise(Expression::Happy, 0.9);
        assert_eq!(v[Expression::Happy], 0.9);
    }
}
