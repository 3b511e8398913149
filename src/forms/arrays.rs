//! Re-keying primitives for dynamic field arrays.
//!
//! The member of array `A` at position `i` is keyed `A.i`. Keys nested
//! under a member (`A.i.name`, `A.i.tags.0`) belong to the same slot and
//! travel with it. Every primitive works in one ordered pass: upward shifts
//! run from the highest position down, downward shifts from the lowest up,
//! so no key is read after it has been overwritten.

use std::collections::BTreeMap;
use std::sync::Arc;

/// Structural operation over the members of one array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reindex {
    /// Open a gap at the position; it stays empty until a mount fills it.
    Insert(usize),
    /// Drop the member at the position and close the gap.
    Remove(usize),
    Swap(usize, usize),
    /// Carry the member at `.0` to `.1`, shifting everything in between.
    Move(usize, usize),
}

impl Reindex {
    /// Apply to every member of array `id` in `map`.
    pub fn apply<V>(self, map: &mut BTreeMap<String, V>, id: &str) {
        match self {
            Reindex::Insert(at) => insert_at(map, id, at),
            Reindex::Remove(at) => remove_at(map, id, at),
            Reindex::Swap(a, b) => swap(map, id, a, b),
            Reindex::Move(from, to) => move_to(map, id, from, to),
        }
    }

    /// Apply to a shared map, cloning it only if array `id` has members.
    pub(crate) fn apply_shared<V: Clone>(self, map: &mut Arc<BTreeMap<String, V>>, id: &str) {
        if has_members(map, id) {
            self.apply(Arc::make_mut(map), id);
        }
    }
}

#[derive(Debug)]
struct Member {
    index: usize,
    key: String,
    /// Remainder after the index segment, including its leading dot.
    suffix: String,
}

fn parse_member(key: &str, prefix: &str) -> Option<Member> {
    let rest = key.strip_prefix(prefix)?;
    let (segment, suffix) = match rest.find('.') {
        Some(dot) => rest.split_at(dot),
        None => (rest, ""),
    };
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment.len() == 1 || !segment.starts_with('0'));
    if !canonical {
        return None;
    }
    // Positions stay below `usize::MAX` so every member can shift up one slot.
    let index: usize = segment.parse().ok().filter(|&i| i < usize::MAX)?;
    Some(Member {
        index,
        key: key.to_owned(),
        suffix: suffix.to_owned(),
    })
}

fn members<V>(map: &BTreeMap<String, V>, id: &str) -> Vec<Member> {
    let prefix = format!("{id}.");
    map.keys()
        .filter_map(|key| parse_member(key, &prefix))
        .collect()
}

fn has_members<V>(map: &BTreeMap<String, V>, id: &str) -> bool {
    let prefix = format!("{id}.");
    map.keys().any(|key| parse_member(key, &prefix).is_some())
}

fn member_key(id: &str, index: usize, suffix: &str) -> String {
    format!("{id}.{index}{suffix}")
}

fn relocate<V>(map: &mut BTreeMap<String, V>, id: &str, member: &Member, to: usize) {
    if let Some(value) = map.remove(&member.key) {
        map.insert(member_key(id, to, &member.suffix), value);
    }
}

/// Detach every entry of slot `index`, returning `(suffix, value)` pairs.
fn take_slot<V>(map: &mut BTreeMap<String, V>, id: &str, index: usize) -> Vec<(String, V)> {
    members(map, id)
        .into_iter()
        .filter(|m| m.index == index)
        .filter_map(|m| map.remove(&m.key).map(|value| (m.suffix, value)))
        .collect()
}

fn put_slot<V>(map: &mut BTreeMap<String, V>, id: &str, index: usize, entries: Vec<(String, V)>) {
    for (suffix, value) in entries {
        map.insert(member_key(id, index, &suffix), value);
    }
}

/// Re-key every member at position `>= at` one slot up. Nothing is created at `at`.
pub fn insert_at<V>(map: &mut BTreeMap<String, V>, id: &str, at: usize) {
    let mut shifted: Vec<Member> = members(map, id)
        .into_iter()
        .filter(|m| m.index >= at)
        .collect();
    shifted.sort_by(|a, b| b.index.cmp(&a.index));
    for member in &shifted {
        relocate(map, id, member, member.index + 1);
    }
}

/// Delete the member at `at` and re-key every member above it one slot down.
pub fn remove_at<V>(map: &mut BTreeMap<String, V>, id: &str, at: usize) {
    let mut affected: Vec<Member> = members(map, id)
        .into_iter()
        .filter(|m| m.index >= at)
        .collect();
    affected.sort_by_key(|m| m.index);
    for member in &affected {
        if member.index == at {
            map.remove(&member.key);
        } else {
            relocate(map, id, member, member.index - 1);
        }
    }
}

/// Exchange the members at `a` and `b`. An empty slot is exchanged too:
/// the present member moves and its old slot becomes empty.
pub fn swap<V>(map: &mut BTreeMap<String, V>, id: &str, a: usize, b: usize) {
    if a == b {
        return;
    }
    let at_a = take_slot(map, id, a);
    let at_b = take_slot(map, id, b);
    put_slot(map, id, b, at_a);
    put_slot(map, id, a, at_b);
}

/// Carry the member at `from` to `to`. Members in between (including the
/// one previously at `to`) shift one slot toward `from`; members outside
/// the range stay put.
pub fn move_to<V>(map: &mut BTreeMap<String, V>, id: &str, from: usize, to: usize) {
    if from == to {
        return;
    }
    let carried = take_slot(map, id, from);
    let mut between: Vec<Member> = members(map, id)
        .into_iter()
        .filter(|m| m.index >= from.min(to) && m.index <= from.max(to))
        .collect();
    if from < to {
        between.sort_by_key(|m| m.index);
        for member in &between {
            relocate(map, id, member, member.index - 1);
        }
    } else {
        between.sort_by(|a, b| b.index.cmp(&a.index));
        for member in &between {
            relocate(map, id, member, member.index + 1);
        }
    }
    put_slot(map, id, to, carried);
}
