// ==========================================
// 批量附件上传工具 - 条目分块器
// ==========================================
// 职责: 把条目列表切成至多 K 个等大分组
// 规则: chunk_size = ceil(N / K)；N ≤ K 时只有一组
// ==========================================

use crate::domain::Entry;

/// 把条目列表切成分组
///
/// 每个分组随后由一个工作任务独立处理。组内保持输入顺序
/// （仅为实现便利，不构成契约）；每个条目恰好落入一个分组。
pub fn split_entries(entries: Vec<Entry>, chunks: usize) -> Vec<Vec<Entry>> {
    assert!(chunks >= 1, "分块数必须 ≥ 1");

    if entries.is_empty() {
        return Vec::new();
    }
    if entries.len() <= chunks {
        return vec![entries];
    }

    let chunk_size = entries.len().div_ceil(chunks);
    let mut groups = Vec::with_capacity(chunks);
    let mut rest = entries;
    while !rest.is_empty() {
        let take = chunk_size.min(rest.len());
        let remainder = rest.split_off(take);
        groups.push(rest);
        rest = remainder;
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entries(n: usize) -> Vec<Entry> {
        (0..n)
            .map(|i| Entry::new(i + 2, format!("REC{}", i), format!("f{}.pdf", i)))
            .collect()
    }

    #[test]
    fn test_small_list_single_group() {
        let groups = split_entries(make_entries(5), 20);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 5);
    }

    #[test]
    fn test_large_list_group_count_follows_chunk_size() {
        // N = 45, K = 20 → chunk_size = 3 → 15 组
        let groups = split_entries(make_entries(45), 20);
        assert_eq!(groups.len(), 15);
        assert!(groups.iter().all(|g| g.len() == 3));

        // N = 100, K = 20 → chunk_size = 5 → 正好 20 组
        let groups = split_entries(make_entries(100), 20);
        assert_eq!(groups.len(), 20);
    }

    #[test]
    fn test_last_group_may_be_short() {
        // N = 10, K = 3 → chunk_size = 4 → 4+4+2
        let groups = split_entries(make_entries(10), 3);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].len(), 4);
        assert_eq!(groups[2].len(), 2);
    }

    #[test]
    fn test_exact_cover_no_duplicates() {
        let entries = make_entries(37);
        let expected: Vec<Entry> = entries.clone();
        let groups = split_entries(entries, 8);

        let mut flattened: Vec<Entry> = groups.into_iter().flatten().collect();
        flattened.sort_by_key(|e| e.line_number);
        assert_eq!(flattened, expected);
    }

    #[test]
    fn test_empty_list() {
        let groups = split_entries(Vec::new(), 20);
        assert!(groups.is_empty());
    }
}
