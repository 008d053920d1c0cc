//! 容器模块
//!
//! 二叉最小堆、栈以及它们与图共享的 `Collection` 接口

mod heap;
mod stack;

pub use heap::ArrayHeap;
pub use stack::Stack;

use std::fmt::{self, Display};

/// 容器的公共接口
pub trait Collection {
    /// 元素个数
    fn len(&self) -> usize;

    /// 是否为空
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 移除全部元素
    fn clear(&mut self);
}

/// 以 `[a, b, c]` 形式输出元素
pub(crate) fn write_items<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    write!(f, "[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}
