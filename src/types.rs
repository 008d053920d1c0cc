//! 通用类型定义

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Add;

/// 边权重
pub type Weight = f64;

/// 最短路径中的距离
///
/// 变体顺序决定比较结果：任意有限距离都小于 `Unreachable`，
/// 而 `Unreachable` 与自身比较不会得出“更小”。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Distance {
    /// 有限距离
    Finite(Weight),
    /// 不可达
    Unreachable,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0.0);

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn value(&self) -> Option<Weight> {
        match self {
            Distance::Finite(v) => Some(*v),
            Distance::Unreachable => None,
        }
    }
}

impl Add<Weight> for Distance {
    type Output = Distance;

    fn add(self, rhs: Weight) -> Distance {
        match self {
            Distance::Finite(v) => Distance::Finite(v + rhs),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl From<Weight> for Distance {
    fn from(v: Weight) -> Self {
        Distance::Finite(v)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(v) => write!(f, "{}", v),
            Distance::Unreachable => write!(f, "-"),
        }
    }
}

/// 不可达序列化为 null
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_ordering() {
        assert!(Distance::Finite(3.0) < Distance::Finite(5.0));
        assert!(Distance::Finite(1e12) < Distance::Unreachable);
        assert!(!(Distance::Unreachable < Distance::Unreachable));
        assert!(!(Distance::Unreachable < Distance::Finite(0.0)));
    }

    #[test]
    fn test_distance_add() {
        assert_eq!(Distance::ZERO + 2.5, Distance::Finite(2.5));
        assert_eq!(Distance::Unreachable + 1.0, Distance::Unreachable);
    }

    #[test]
    fn test_distance_display_and_json() {
        assert_eq!(Distance::Finite(3.0).to_string(), "3");
        assert_eq!(Distance::Unreachable.to_string(), "-");
        assert_eq!(serde_json::to_string(&Distance::Finite(1.5)).unwrap(), "1.5");
        assert_eq!(serde_json::to_string(&Distance::Unreachable).unwrap(), "null");
    }
}
