// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-to-one assignment of `_includes` patterns to array elements.
//!
//! Maximum bipartite matching with augmenting paths (Kuhn). A greedy scan is
//! not enough: a loose pattern listed first may take the only element a
//! stricter pattern could use.

/// Assign each pattern a distinct element.
///
/// `edges[p]` lists the elements pattern `p` matches. Returns, per pattern,
/// the element it was given in a maximum matching, or `None`.
pub(super) fn assign(edges: &[Vec<usize>], element_count: usize) -> Vec<Option<usize>> {
    let mut owner: Vec<Option<usize>> = vec![None; element_count];
    for pattern in 0..edges.len() {
        let mut visited = vec![false; element_count];
        augment(pattern, edges, &mut owner, &mut visited);
    }

    let mut assignment = vec![None; edges.len()];
    for (element, pattern) in owner.iter().enumerate() {
        if let Some(slot) = pattern.and_then(|p| assignment.get_mut(p)) {
            *slot = Some(element);
        }
    }
    assignment
}

fn augment(
    pattern: usize,
    edges: &[Vec<usize>],
    owner: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    let Some(candidates) = edges.get(pattern) else {
        return false;
    };
    for &element in candidates {
        match visited.get_mut(element) {
            Some(seen) if !*seen => *seen = true,
            _ => continue,
        }
        let current = owner.get(element).copied().flatten();
        if current.is_none_or(|other| augment(other, edges, owner, visited)) {
            if let Some(slot) = owner.get_mut(element) {
                *slot = Some(pattern);
            }
            return true;
        }
    }
    false
}

#[cfg(test)]
#[path = "includes_tests.rs"]
mod tests;
