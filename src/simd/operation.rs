/// Set and vector kernels shared by both query engines
/// (hand-unrolled loops, no external dependencies).
pub struct VectorOps;

impl VectorOps {
    /// Fast union of sorted arrays
    /// Merges two sorted arrays into one sorted array with no duplicates
    pub fn union_sorted(a: &[u32], b: &[u32]) -> Vec<u32> {
        let mut result = Vec::with_capacity(a.len() + b.len());
        let mut i = 0;
        let mut j = 0;

        while i < a.len() && j < b.len() {
            if a[i] < b[j] {
                result.push(a[i]);
                i += 1;
            } else if a[i] > b[j] {
                result.push(b[j]);
                j += 1;
            } else {
                result.push(a[i]);
                i += 1;
                j += 1;
            }
        }

        result.extend_from_slice(&a[i..]);
        result.extend_from_slice(&b[j..]);

        result
    }

    /// Intersection of sorted arrays. Skips whole blocks when one side's
    /// block ends before the other side's current element.
    pub fn intersect_sorted(a: &[u32], b: &[u32]) -> Vec<u32> {
        if a.is_empty() || b.is_empty() {
            return Vec::new();
        }

        let mut result = Vec::new();
        let mut i = 0;
        let mut j = 0;

        const GALLOP_THRESHOLD: usize = 8;

        while i < a.len() && j < b.len() {
            if i + GALLOP_THRESHOLD <= a.len() && j + GALLOP_THRESHOLD <= b.len() {
                if a[i + GALLOP_THRESHOLD - 1] < b[j] {
                    i += GALLOP_THRESHOLD;
                    continue;
                }

                if b[j + GALLOP_THRESHOLD - 1] < a[i] {
                    j += GALLOP_THRESHOLD;
                    continue;
                }
            }

            if a[i] < b[j] {
                i += 1;
            } else if a[i] > b[j] {
                j += 1;
            } else {
                result.push(a[i]);
                i += 1;
                j += 1;
            }
        }

        result
    }

    /// Dot product. Vectors of different length have no defined product
    /// here and yield 0.0.
    pub fn dot_product(a: &[f64], b: &[f64]) -> f64 {
        if a.len() != b.len() {
            return 0.0;
        }

        let len = a.len();
        let mut sum = 0.0;
        let mut i = 0;

        // Process 4 elements at a time (helps compiler auto-vectorize)
        while i + 4 <= len {
            sum += a[i] * b[i];
            sum += a[i + 1] * b[i + 1];
            sum += a[i + 2] * b[i + 2];
            sum += a[i + 3] * b[i + 3];
            i += 4;
        }

        while i < len {
            sum += a[i] * b[i];
            i += 1;
        }

        sum
    }

    pub fn magnitude(v: &[f64]) -> f64 {
        Self::dot_product(v, v).sqrt()
    }

    /// dot(a, b) / (|a| * |b|)
    ///
    /// Mismatched lengths and zero-magnitude vectors give 0.0 instead of NaN.
    /// The result is capped at 1.0 so rounding on parallel vectors cannot
    /// push it past the cosine range.
    pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
        if a.len() != b.len() {
            return 0.0;
        }

        let a_magnitude = Self::magnitude(a);
        let b_magnitude = Self::magnitude(b);

        if a_magnitude == 0.0 || b_magnitude == 0.0 {
            return 0.0;
        }

        (Self::dot_product(a, b) / (a_magnitude * b_magnitude)).min(1.0)
    }
}
