//! 列表视图核心：客户端分页 + 行选择
//!
//! 纯状态层，不依赖 DOM，由 `components::record_table` 驱动。

use qafzah_shared::RecordId;
use std::collections::BTreeSet;

/// 可选的每页行数。
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];
/// 默认每页行数。
pub const DEFAULT_PAGE_SIZE: usize = 5;

// =========================================================
// 分页
// =========================================================

/// 客户端分页状态 `(pageIndex, pageSize)`。
///
/// 集合整体驻留内存，可见页是连续切片
/// `[page*limit, min(len, (page+1)*limit))`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    limit: usize,
}

impl Paginator {
    pub fn new() -> Self {
        Self {
            page: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// 当前可见页的切片。越界页返回空切片。
    pub fn slice<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        let start = self.page * self.limit;
        if start >= records.len() {
            return &[];
        }
        let end = (start + self.limit).min(records.len());
        &records[start..end]
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        (self.page + 1) * self.limit < total
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.page -= 1;
        }
    }

    pub fn next(&mut self, total: usize) {
        if self.has_next(total) {
            self.page += 1;
        }
    }

    /// 切换每页行数。页码保持不变，越界由 `slice` 兜底。
    pub fn set_limit(&mut self, limit: usize) {
        if PAGE_SIZE_OPTIONS.contains(&limit) {
            self.limit = limit;
        }
    }

    /// 页脚标签，如 `1-5 of 12`。
    pub fn range_label(&self, total: usize) -> String {
        if total == 0 {
            return "0 of 0".to_string();
        }
        let start = self.page * self.limit;
        let end = (start + self.limit).min(total);
        if start >= total {
            return format!("0 of {}", total);
        }
        format!("{}-{} of {}", start + 1, end, total)
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================
// 行选择
// =========================================================

/// 选中行的标识符集合。
///
/// 仅作用于单个列表实例，导航后即丢弃；不驱动任何服务端状态。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(BTreeSet<RecordId>);

impl Selection {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.0.contains(&id)
    }

    /// 单行切换。
    pub fn toggle(&mut self, id: RecordId) {
        if !self.0.insert(id) {
            self.0.remove(&id);
        }
    }

    pub fn remove(&mut self, id: RecordId) {
        self.0.remove(&id);
    }

    /// 全选开关：作用于全部已加载记录，而非仅当前页。
    pub fn set_all<I: IntoIterator<Item = RecordId>>(&mut self, ids: I, selected: bool) {
        if selected {
            self.0 = ids.into_iter().collect();
        } else {
            self.0.clear();
        }
    }

    /// 全部已加载记录均被选中。
    pub fn is_all(&self, total: usize) -> bool {
        total > 0 && self.0.len() == total
    }

    /// 部分选中（用于表头复选框的 indeterminate 展示）。
    pub fn is_partial(&self, total: usize) -> bool {
        !self.0.is_empty() && self.0.len() < total
    }
}

#[cfg(test)]
mod tests;
