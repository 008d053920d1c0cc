//! 栈

use super::{write_items, Collection};
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// 后进先出栈
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 压栈
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// 弹出栈顶元素
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::EmptyContainer("栈为空"))
    }

    /// 查看栈顶元素
    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(Error::EmptyContainer("栈为空"))
    }

    /// 从栈底到栈顶遍历
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// 按弹出顺序返回全部元素
    pub fn into_pop_order(self) -> Vec<T> {
        let mut items = self.items;
        items.reverse();
        items
    }
}

impl<T> Collection for Stack<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, self.iter())
    }
}
