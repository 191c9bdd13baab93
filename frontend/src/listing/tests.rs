use super::*;

fn ids(range: std::ops::RangeInclusive<RecordId>) -> Vec<RecordId> {
    range.collect()
}

// =========================================================
// 分页
// =========================================================

#[test]
fn test_visible_page_is_contiguous_slice() {
    let records = ids(1..=12);
    let mut paginator = Paginator::new();
    assert_eq!(paginator.slice(&records), &[1, 2, 3, 4, 5]);

    paginator.next(records.len());
    assert_eq!(paginator.slice(&records), &[6, 7, 8, 9, 10]);

    paginator.next(records.len());
    assert_eq!(paginator.slice(&records), &[11, 12]);
    assert!(!paginator.has_next(records.len()));
}

#[test]
fn test_six_records_page_size_five_scenario() {
    // 集合 [1..6]，每页 5 行：第 0 页为 1-5，第 1 页仅为 6
    let records = ids(1..=6);
    let mut paginator = Paginator::new();
    assert_eq!(paginator.slice(&records), &[1, 2, 3, 4, 5]);

    paginator.next(records.len());
    assert_eq!(paginator.page(), 1);
    assert_eq!(paginator.slice(&records), &[6]);
}

#[test]
fn test_default_and_allowed_page_sizes() {
    let mut paginator = Paginator::new();
    assert_eq!(paginator.limit(), 5);

    paginator.set_limit(25);
    assert_eq!(paginator.limit(), 25);

    // 枚举之外的值被忽略
    paginator.set_limit(7);
    assert_eq!(paginator.limit(), 25);
}

#[test]
fn test_limit_change_keeps_page_and_slice_clamps() {
    let records = ids(1..=6);
    let mut paginator = Paginator::new();
    paginator.next(records.len());
    assert_eq!(paginator.page(), 1);

    // 页码不重置；第 1 页在 limit=25 下越界，切片为空
    paginator.set_limit(25);
    assert_eq!(paginator.page(), 1);
    assert!(paginator.slice(&records).is_empty());
    assert_eq!(paginator.range_label(records.len()), "0 of 6");
}

#[test]
fn test_prev_next_guards() {
    let records = ids(1..=3);
    let mut paginator = Paginator::new();
    paginator.prev();
    assert_eq!(paginator.page(), 0);
    paginator.next(records.len());
    assert_eq!(paginator.page(), 0);
}

#[test]
fn test_range_label() {
    let mut paginator = Paginator::new();
    assert_eq!(paginator.range_label(0), "0 of 0");
    assert_eq!(paginator.range_label(12), "1-5 of 12");
    paginator.next(12);
    assert_eq!(paginator.range_label(12), "6-10 of 12");
    paginator.next(12);
    assert_eq!(paginator.range_label(12), "11-12 of 12");
}

// =========================================================
// 行选择
// =========================================================

#[test]
fn test_toggle_one() {
    let mut selection = Selection::default();
    selection.toggle(3);
    assert!(selection.contains(3));
    selection.toggle(3);
    assert!(!selection.contains(3));
    assert!(selection.is_empty());
}

#[test]
fn test_select_all_from_partial_selects_every_loaded_record() {
    let all = ids(1..=6);
    let mut selection = Selection::default();
    selection.toggle(2);
    assert!(selection.is_partial(all.len()));

    // 部分选中时打开全选：全部 6 条都被选中
    selection.set_all(all.clone(), true);
    assert!(selection.is_all(all.len()));
    assert_eq!(selection.len(), 6);

    // 再次切换：全部取消
    selection.set_all(all.clone(), false);
    assert!(selection.is_empty());
    assert!(!selection.is_partial(all.len()));
}

#[test]
fn test_is_all_on_empty_collection() {
    let selection = Selection::default();
    assert!(!selection.is_all(0));
}
