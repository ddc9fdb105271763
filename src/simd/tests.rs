//! SIMD Module Tests
//!
//! ## Test Scopes
//! - **Set kernels**: sorted union and block-skipping intersection.
//! - **Vector kernels**: dot product, cosine similarity and its guards.

use crate::simd::operation::VectorOps;

// ============================================================
// SET KERNEL TESTS
// ============================================================

#[test]
fn test_union_sorted_dedups() {
    assert_eq!(VectorOps::union_sorted(&[1, 3, 5], &[2, 3, 6]), vec![1, 2, 3, 5, 6]);
    assert_eq!(VectorOps::union_sorted(&[], &[4]), vec![4]);
    assert!(VectorOps::union_sorted(&[], &[]).is_empty());
}

#[test]
fn test_intersect_sorted() {
    assert_eq!(VectorOps::intersect_sorted(&[1, 2, 3, 4], &[2, 4, 8]), vec![2, 4]);
    assert!(VectorOps::intersect_sorted(&[1, 2], &[]).is_empty());
}

#[test]
fn test_intersect_sorted_skips_blocks() {
    let a: Vec<u32> = (0..100).collect();
    let b: Vec<u32> = (50..150).step_by(5).collect();
    let expected: Vec<u32> = (50..100).step_by(5).collect();

    assert_eq!(VectorOps::intersect_sorted(&a, &b), expected);
    assert_eq!(VectorOps::intersect_sorted(&b, &a), expected);
}

// ============================================================
// VECTOR KERNEL TESTS
// ============================================================

#[test]
fn test_dot_product_unrolled_tail() {
    let a = [1.0, 2.0, 3.0, 4.0, 5.0];
    let b = [1.0, 1.0, 1.0, 1.0, 2.0];
    assert_eq!(VectorOps::dot_product(&a, &b), 20.0);
}

#[test]
fn test_dot_product_length_mismatch() {
    assert_eq!(VectorOps::dot_product(&[1.0, 2.0], &[1.0]), 0.0);
}

#[test]
fn test_cosine_parallel_vectors() {
    let score = VectorOps::cosine_similarity(&[0.5, 0.5], &[0.25, 0.25]);
    assert!((score - 1.0).abs() < 1e-12);
    assert!(score <= 1.0);
}

#[test]
fn test_cosine_orthogonal_vectors() {
    assert_eq!(VectorOps::cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
}

#[test]
fn test_cosine_zero_magnitude_is_zero() {
    let score = VectorOps::cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]);
    assert_eq!(score, 0.0);
    assert!(!score.is_nan());
}

#[test]
fn test_cosine_length_mismatch_is_zero() {
    assert_eq!(VectorOps::cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
}
