/// Every `k`-element subset of `items`, in lexicographic index order.
///
/// `k == 0` yields the single empty subset; `k > items.len()` yields nothing.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let n = items.len();
    if k > n {
        return vec![];
    }

    let mut out = Vec::with_capacity(binomial(n, k));
    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        out.push(indices.iter().map(|&i| items[i].clone()).collect());

        // rightmost index that can still move
        let Some(pos) = (0..k).rev().find(|&i| indices[i] < n - k + i) else {
            break;
        };
        indices[pos] += 1;
        for i in pos + 1..k {
            indices[i] = indices[i - 1] + 1;
        }
    }
    out
}

/// `C(n, k)`.
#[must_use]
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}
