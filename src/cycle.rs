use alloc::vec;
use core::ptr::NonNull;

use crate::error::GroupError;
use crate::hash::HashSet;
use crate::link::Node;

/// Iterator over the members of a ring, starting with the given node and
/// following `right` links.
pub(crate) struct Members {
    start: NonNull<Node>,
    cursor: Option<NonNull<Node>>,
}

impl Members {
    pub fn new(start: &Node) -> Self {
        let start = NonNull::from(start);
        Self {
            start,
            cursor: Some(start),
        }
    }
}

impl Iterator for Members {
    type Item = NonNull<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor?;
        // SAFETY: ring members are live until they detach themselves.
        let next = unsafe { current.as_ref() }.right();
        self.cursor = next.filter(|&next| next != self.start);
        Some(current)
    }
}

/// Walk the ring containing `start` and verify its linkage.
///
/// Returns the number of members in the ring. A singleton has one member.
///
/// The first pass follows `right` links and tracks visited nodes, so a chain
/// that does not close back onto `start` is reported instead of looping
/// forever. The second pass checks that every `right` hop is mirrored by a
/// `left` link.
pub(crate) fn check_ring(start: &Node) -> Result<usize, GroupError> {
    let start_ptr = NonNull::from(start);
    match (start.left(), start.right()) {
        (None, None) => return Ok(1),
        (Some(_), Some(_)) => {}
        _ => return Err(GroupError::HalfLinked),
    }

    let mut members = vec![start_ptr];
    let mut visited = HashSet::default();
    visited.insert(start_ptr);
    let mut current = start_ptr;
    loop {
        // SAFETY: ring members are live until they detach themselves.
        let Some(next) = unsafe { current.as_ref() }.right() else {
            return Err(GroupError::HalfLinked);
        };
        if next == current {
            return Err(GroupError::SelfLoop);
        }
        if next == start_ptr {
            break;
        }
        if !visited.insert(next) {
            return Err(GroupError::NotCircular);
        }
        members.push(next);
        current = next;
    }

    for &member in &members {
        // SAFETY: every member was reached through a live `right` link.
        let right = unsafe { member.as_ref() }.right();
        let mirrored = right.map(|right| unsafe { right.as_ref() }.left());
        if mirrored != Some(Some(member)) {
            return Err(GroupError::Asymmetric);
        }
    }
    Ok(members.len())
}

#[inline]
#[cfg(debug_assertions)]
pub(crate) fn debug_ring(node: &Node) {
    match check_ring(node) {
        Ok(len) => trace!("linkref ring check found {len} members"),
        Err(err) => {
            error!("linkref ring check failed: {err}");
            panic!("linkref ownership ring is corrupt: {err}");
        }
    }
}
