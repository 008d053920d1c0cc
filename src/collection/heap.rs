//! 基于数组的二叉最小堆
//!
//! 下标 i 处的元素不大于下标 2i+1 与 2i+2 处的子元素。
//! 相等元素之间的出堆顺序不保证稳定。

use super::Collection;
use crate::error::{Error, Result};
use std::fmt;

/// 数组实现的优先队列
#[derive(Debug, Clone)]
pub struct ArrayHeap<T> {
    items: Vec<T>,
}

impl<T> Default for ArrayHeap<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: PartialOrd> ArrayHeap<T> {
    /// 创建空堆
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建预分配容量的空堆
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// 插入元素，上浮直到父节点不再严格大于它
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        let mut pos = self.items.len() - 1;
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.items[parent] > self.items[pos] {
                self.items.swap(parent, pos);
                pos = parent;
            } else {
                break;
            }
        }
    }

    /// 查看堆顶元素
    pub fn peek(&self) -> Result<&T> {
        self.items.first().ok_or(Error::EmptyContainer("堆为空"))
    }

    /// 移除并返回最小元素
    pub fn extract_min(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::EmptyContainer("堆为空"));
        }
        let top = self.items.swap_remove(0);
        self.sift_down(0);
        Ok(top)
    }

    /// 下沉：与较小的子节点比较，子节点严格更小时交换
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            if left >= len {
                break;
            }
            let child = if right < len && self.items[left] >= self.items[right] {
                right
            } else {
                left
            };
            if self.items[child] < self.items[pos] {
                self.items.swap(child, pos);
                pos = child;
            } else {
                break;
            }
        }
    }

    /// 由小到大访问元素，不改变堆本身
    pub fn sorted(&self) -> Vec<&T> {
        let mut copy: ArrayHeap<&T> = self.items.iter().collect();
        let mut result = Vec::with_capacity(copy.len());
        while let Ok(item) = copy.extract_min() {
            result.push(item);
        }
        result
    }

    /// 消耗堆，按由小到大的顺序返回全部元素
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.items.len());
        while let Ok(item) = self.extract_min() {
            result.push(item);
        }
        result
    }
}

impl<T> Collection for ArrayHeap<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: PartialOrd> FromIterator<T> for ArrayHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = ArrayHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: PartialOrd> Extend<T> for ArrayHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

/// 两个堆包含相同元素（按出堆顺序比较）即相等
impl<T: PartialOrd> PartialEq for ArrayHeap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.sorted() == other.sorted()
    }
}

/// 输出树形结构：右子树在上，每层缩进一个 `|`
impl<T: fmt::Display> fmt::Display for ArrayHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_node<T: fmt::Display>(
            items: &[T],
            pos: usize,
            level: usize,
            f: &mut fmt::Formatter<'_>,
        ) -> fmt::Result {
            if pos >= items.len() {
                return Ok(());
            }
            write_node(items, 2 * pos + 2, level + 1, f)?;
            writeln!(f, "{}{}", "|".repeat(level), items[pos])?;
            write_node(items, 2 * pos + 1, level + 1, f)
        }
        write_node(&self.items, 0, 0, f)
    }
}
