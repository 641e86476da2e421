//! List set operations
//!
//! Ordered string sequences used as sets. Every combining operation first
//! canonicalizes its inputs with [`compress`] (sort, then drop adjacent
//! duplicates), so results are sorted and duplicate-free.

/// Sort lexicographically and drop adjacent duplicates.
pub fn compress(list: &[String]) -> Vec<String> {
    let mut out = list.to_vec();
    out.sort();
    out.dedup();
    out
}

/// Linear exact-match membership test.
pub fn member(list: &[String], item: &str) -> bool {
    list.iter().any(|i| i == item)
}

/// Rebuild `list` without any occurrence of `item`.
pub fn remove(list: &[String], item: &str) -> Vec<String> {
    list.iter().filter(|i| *i != item).cloned().collect()
}

pub fn union(a: &[String], b: &[String]) -> Vec<String> {
    let mut joined = a.to_vec();
    joined.extend_from_slice(b);
    compress(&joined)
}

pub fn intersection(a: &[String], b: &[String]) -> Vec<String> {
    let a = compress(a);
    let b = compress(b);
    a.into_iter().filter(|i| member(&b, i)).collect()
}

pub fn difference(a: &[String], b: &[String]) -> Vec<String> {
    let a = compress(a);
    let b = compress(b);
    a.into_iter().filter(|i| !member(&b, i)).collect()
}

/// Symmetric difference, sorted.
pub fn disjunction(a: &[String], b: &[String]) -> Vec<String> {
    let a = compress(a);
    let b = compress(b);
    let mut out: Vec<String> = a.iter().filter(|i| !member(&b, i)).cloned().collect();
    out.extend(b.iter().filter(|i| !member(&a, i)).cloned());
    out.sort();
    out
}

/// True when both lists hold the same elements, ignoring order and duplicates.
pub fn equivalence(a: &[String], b: &[String]) -> bool {
    compress(a).join(",") == compress(b).join(",")
}

/// True when every element of `a` is in `b`.
pub fn subset(a: &[String], b: &[String]) -> bool {
    let a = compress(a);
    let b = compress(b);
    let found = a.iter().filter(|i| member(&b, i)).count();
    found == a.len()
}
