//! Load-time consistency pass. Collections are loaded and seeded
//! independently, so after a partial wipe they can disagree; this brings
//! them back in line with the store invariants instead of failing.

use rust_decimal::Decimal;
use std::collections::HashSet;

use super::Collections;
use crate::error::EntityKind;
use crate::models::{non_empty_id, Category, FamilyMember, Role};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairAction {
    DroppedDuplicateId,
    DroppedMissingAccount,
    DroppedNonPositiveAmount,
    ClearedDanglingParent,
    ClearedMismatchedParent,
    ClearedCyclicParent,
    ClearedNestedParent,
    ClearedDanglingCategory,
    ClearedMismatchedCategory,
    ClearedDanglingMember,
    PromotedToAdmin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repair {
    pub entity: EntityKind,
    pub id: String,
    pub action: RepairAction,
}

pub(crate) fn repair(data: &mut Collections) -> Vec<Repair> {
    let mut repairs = Vec::new();
    let mut log = |entity: EntityKind, id: &str, action: RepairAction| {
        tracing::warn!("repairing {entity} \"{id}\": {action:?}");
        repairs.push(Repair {
            entity,
            id: id.to_string(),
            action,
        });
    };

    for (entity, ids) in [
        (EntityKind::Account, dedup(&mut data.accounts, |a| &a.id)),
        (EntityKind::Category, dedup(&mut data.categories, |c| &c.id)),
        (EntityKind::FamilyMember, dedup(&mut data.family_members, |m| &m.id)),
        (EntityKind::Transaction, dedup(&mut data.transactions, |t| &t.id)),
        (EntityKind::Scenario, dedup(&mut data.scenarios, |s| &s.id)),
    ] {
        for id in ids {
            log(entity, &id, RepairAction::DroppedDuplicateId);
        }
    }

    // ── Categories ──
    for i in 0..data.categories.len() {
        let parent_id = non_empty_id(data.categories[i].parent_id.take());
        let Some(parent_id) = parent_id else {
            continue;
        };
        let own_type = data.categories[i].category_type;
        let parent_type = Category::find_by_id(&data.categories, &parent_id).map(|p| p.category_type);
        let id = &data.categories[i].id;
        match parent_type {
            None => log(EntityKind::Category, id, RepairAction::ClearedDanglingParent),
            Some(t) if t != own_type => {
                log(EntityKind::Category, id, RepairAction::ClearedMismatchedParent)
            }
            Some(_) => data.categories[i].parent_id = Some(parent_id),
        }
    }
    for i in 0..data.categories.len() {
        if has_cycle(&data.categories, i) {
            data.categories[i].parent_id = None;
            log(EntityKind::Category, &data.categories[i].id, RepairAction::ClearedCyclicParent);
        }
    }
    // Subcategories hang off root categories only.
    let nested: Vec<usize> = (0..data.categories.len())
        .filter(|&i| {
            data.categories[i]
                .parent_id
                .as_deref()
                .and_then(|p| Category::find_by_id(&data.categories, p))
                .is_some_and(|p| !p.is_root())
        })
        .collect();
    for i in nested {
        data.categories[i].parent_id = None;
        log(EntityKind::Category, &data.categories[i].id, RepairAction::ClearedNestedParent);
    }

    // ── Family members ──
    if !data.family_members.is_empty() && FamilyMember::admin_count(&data.family_members) == 0 {
        let first = &mut data.family_members[0];
        first.role = Role::Admin;
        log(EntityKind::FamilyMember, &first.id, RepairAction::PromotedToAdmin);
    }

    // ── Transactions ──
    let account_ids: HashSet<&str> = data.accounts.iter().map(|a| a.id.as_str()).collect();
    let member_ids: HashSet<&str> = data.family_members.iter().map(|m| m.id.as_str()).collect();
    let categories = &data.categories;

    data.transactions.retain(|t| {
        if !account_ids.contains(t.account_id.as_str()) {
            log(EntityKind::Transaction, &t.id, RepairAction::DroppedMissingAccount);
            false
        } else if t.amount <= Decimal::ZERO {
            log(EntityKind::Transaction, &t.id, RepairAction::DroppedNonPositiveAmount);
            false
        } else {
            true
        }
    });

    for txn in &mut data.transactions {
        if let Some(category_id) = non_empty_id(txn.category_id.take()) {
            match Category::find_by_id(categories, &category_id) {
                None => log(EntityKind::Transaction, &txn.id, RepairAction::ClearedDanglingCategory),
                Some(c) if c.category_type != txn.txn_type => {
                    log(EntityKind::Transaction, &txn.id, RepairAction::ClearedMismatchedCategory)
                }
                Some(_) => txn.category_id = Some(category_id),
            }
        }
        if let Some(member_id) = non_empty_id(txn.member_id.take()) {
            if member_ids.contains(member_id.as_str()) {
                txn.member_id = Some(member_id);
            } else {
                log(EntityKind::Transaction, &txn.id, RepairAction::ClearedDanglingMember);
            }
        }
    }

    repairs
}

/// Drop every record whose id was already seen, keeping the first. Returns
/// the dropped ids.
fn dedup<T>(items: &mut Vec<T>, id: impl Fn(&T) -> &String) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dropped = Vec::new();
    items.retain(|item| {
        let item_id = id(item);
        if seen.insert(item_id.clone()) {
            true
        } else {
            dropped.push(item_id.clone());
            false
        }
    });
    dropped
}

/// True if following parent links from `categories[index]` leads back to it.
fn has_cycle(categories: &[Category], index: usize) -> bool {
    let start = &categories[index].id;
    let mut current = categories[index].parent_id.as_deref();
    for _ in 0..categories.len() {
        let Some(parent_id) = current else {
            return false;
        };
        if parent_id == start {
            return true;
        }
        current = Category::find_by_id(categories, parent_id).and_then(|c| c.parent_id.as_deref());
    }
    false
}
