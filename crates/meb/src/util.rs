//! Small utilities: subset enumeration.

/// k-combinations of items (lexicographic by index).
pub(crate) fn combinations<T: Copy>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let n = items.len();
    if k > n || k == 0 {
        return Vec::new();
    }
    let mut idxs: Vec<usize> = (0..k).collect();
    let mut out = Vec::new();
    loop {
        out.push(idxs.iter().map(|&i| items[i]).collect());
        // advance the rightmost index that still has room
        let Some(i) = (0..k).rev().find(|&i| idxs[i] != i + n - k) else {
            break;
        };
        idxs[i] += 1;
        for j in i + 1..k {
            idxs[j] = idxs[j - 1] + 1;
        }
    }
    out
}
