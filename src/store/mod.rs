//! The entity store: sole owner of accounts, categories, family members,
//! transactions and scenarios. Every mutation is validated in full before
//! anything changes, then written through to storage.

mod envelope;
mod repair;
mod seed;
mod shared;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::analytics::{
    self, AccountBalance, CategoryTotal, CurrencyTotal, MonthlyTotal, ProjectionPoint,
};
use crate::error::{EntityKind, Result, StoreError};
use crate::models::{
    non_empty_id, Account, AccountPatch, Category, FamilyMember, FlowType, NewAccount,
    NewCategory, NewFamilyMember, NewScenario, NewTransaction, Role, Scenario, Transaction,
    TransactionPatch,
};
use crate::storage::Storage;

pub use repair::{Repair, RepairAction};
pub use shared::SharedStore;

pub const KEY_TRANSACTIONS: &str = "transactions";
pub const KEY_CATEGORIES: &str = "categories";
pub const KEY_ACCOUNTS: &str = "accounts";
pub const KEY_FAMILY_MEMBERS: &str = "familyMembers";
pub const KEY_SCENARIOS: &str = "scenarios";

/// Largest accepted transaction amount or absolute account balance.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

/// Longest accepted scenario timeframe, in months.
pub const MAX_TIMEFRAME_MONTHS: u32 = 1200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collection {
    Accounts,
    Categories,
    FamilyMembers,
    Transactions,
    Scenarios,
}

impl Collection {
    const ALL: [Collection; 5] = [
        Self::Accounts,
        Self::Categories,
        Self::FamilyMembers,
        Self::Transactions,
        Self::Scenarios,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Accounts => KEY_ACCOUNTS,
            Self::Categories => KEY_CATEGORIES,
            Self::FamilyMembers => KEY_FAMILY_MEMBERS,
            Self::Transactions => KEY_TRANSACTIONS,
            Self::Scenarios => KEY_SCENARIOS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Collections {
    pub(crate) accounts: Vec<Account>,
    pub(crate) categories: Vec<Category>,
    pub(crate) family_members: Vec<FamilyMember>,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) scenarios: Vec<Scenario>,
}

/// What happened while loading: which keys were seeded, which were read
/// from the unversioned layout, and which records were repaired.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub seeded: Vec<&'static str>,
    pub migrated: Vec<&'static str>,
    pub repairs: Vec<Repair>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.seeded.is_empty() && self.migrated.is_empty() && self.repairs.is_empty()
    }
}

/// An owned copy of every collection, tagged with the store revision it was
/// taken at. Equal revisions mean equal contents.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub revision: u64,
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub family_members: Vec<FamilyMember>,
    pub transactions: Vec<Transaction>,
    pub scenarios: Vec<Scenario>,
}

impl Snapshot {
    pub fn monthly_totals(&self) -> Vec<MonthlyTotal> {
        analytics::monthly_totals(&self.transactions)
    }

    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        analytics::category_totals(&self.transactions, &self.categories)
    }

    pub fn account_projection(&self) -> Vec<AccountBalance> {
        analytics::account_projection(&self.accounts)
    }

    pub fn total_balance(&self) -> Vec<CurrencyTotal> {
        analytics::total_balance(&self.accounts)
    }

    pub fn growth_projection(&self) -> Vec<ProjectionPoint> {
        analytics::growth_projection(&self.accounts, &self.scenarios)
    }
}

pub struct Store<S: Storage> {
    storage: S,
    data: Collections,
    revision: u64,
    load_report: LoadReport,
}

impl<S: Storage> Store<S> {
    /// Read every collection from `storage`, seeding any that is missing or
    /// unreadable, then repair cross-collection inconsistencies.
    ///
    /// Fails only if the storage backend cannot be read at all. Seeded,
    /// migrated and repaired collections are written back on a best-effort
    /// basis.
    pub fn load(storage: S) -> Result<Self> {
        let mut report = LoadReport::default();
        let mut data = Collections {
            accounts: load_collection(&storage, KEY_ACCOUNTS, seed::accounts, &mut report)?,
            categories: load_collection(&storage, KEY_CATEGORIES, seed::categories, &mut report)?,
            family_members: load_collection(
                &storage,
                KEY_FAMILY_MEMBERS,
                seed::family_members,
                &mut report,
            )?,
            transactions: load_collection(
                &storage,
                KEY_TRANSACTIONS,
                seed::transactions,
                &mut report,
            )?,
            scenarios: load_collection(&storage, KEY_SCENARIOS, seed::scenarios, &mut report)?,
        };

        let before = data.clone();
        report.repairs = repair::repair(&mut data);

        let mut store = Self {
            storage,
            data,
            revision: 0,
            load_report: LoadReport::default(),
        };

        for collection in Collection::ALL {
            let key = collection.key();
            let rewrite = report.seeded.contains(&key)
                || report.migrated.contains(&key)
                || store.differs_from(&before, collection);
            if rewrite {
                if let Err(e) = store.persist(collection) {
                    tracing::warn!("could not write back \"{key}\" after load: {e}");
                }
            }
        }

        tracing::info!(
            "loaded {} accounts, {} categories, {} members, {} transactions ({} repairs)",
            store.data.accounts.len(),
            store.data.categories.len(),
            store.data.family_members.len(),
            store.data.transactions.len(),
            report.repairs.len(),
        );
        store.load_report = report;
        Ok(store)
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    /// Hand back the storage backend, e.g. to reopen the store on it.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Bumped once per applied mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            revision: self.revision,
            accounts: self.data.accounts.clone(),
            categories: self.data.categories.clone(),
            family_members: self.data.family_members.clone(),
            transactions: self.data.transactions.clone(),
            scenarios: self.data.scenarios.clone(),
        }
    }

    // ── Reads ─────────────────────────────────────────────────

    /// Most recently added first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.data.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.data.categories
    }

    pub fn accounts(&self) -> &[Account] {
        &self.data.accounts
    }

    pub fn family_members(&self) -> &[FamilyMember] {
        &self.data.family_members
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.data.scenarios
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.data.transactions.iter().find(|t| t.id == id)
    }

    pub fn account(&self, id: &str) -> Option<&Account> {
        Account::find_by_id(&self.data.accounts, id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        Category::find_by_id(&self.data.categories, id)
    }

    pub fn family_member(&self, id: &str) -> Option<&FamilyMember> {
        self.data.family_members.iter().find(|m| m.id == id)
    }

    pub fn category_children(&self, parent_id: &str) -> Vec<&Category> {
        self.data
            .categories
            .iter()
            .filter(|c| c.parent_id.as_deref() == Some(parent_id))
            .collect()
    }

    pub fn root_categories(&self, category_type: FlowType) -> Vec<&Category> {
        self.data
            .categories
            .iter()
            .filter(|c| c.is_root() && c.category_type == category_type)
            .collect()
    }

    pub fn monthly_totals(&self) -> Vec<MonthlyTotal> {
        analytics::monthly_totals(&self.data.transactions)
    }

    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        analytics::category_totals(&self.data.transactions, &self.data.categories)
    }

    pub fn account_projection(&self) -> Vec<AccountBalance> {
        analytics::account_projection(&self.data.accounts)
    }

    pub fn total_balance(&self) -> Vec<CurrencyTotal> {
        analytics::total_balance(&self.data.accounts)
    }

    pub fn growth_projection(&self) -> Vec<ProjectionPoint> {
        analytics::growth_projection(&self.data.accounts, &self.data.scenarios)
    }

    // ── Transactions ──────────────────────────────────────────

    pub fn add_transaction(&mut self, new: NewTransaction) -> Result<Transaction> {
        let description = required_text("description", &new.description)?;
        let amount = positive_amount(new.amount)?;
        let date = parse_date(&new.date)?;
        self.check_account(&new.account_id)?;
        let category_id = non_empty_id(new.category_id);
        if let Some(category_id) = &category_id {
            self.check_category_for(category_id, new.txn_type)?;
        }
        let member_id = non_empty_id(new.member_id);
        if let Some(member_id) = &member_id {
            self.check_member(member_id)?;
        }

        let txn = Transaction {
            id: self.fresh_id(|id| self.transaction(id).is_some()),
            description,
            amount,
            date,
            txn_type: new.txn_type,
            category_id,
            account_id: new.account_id,
            member_id,
        };
        self.data.transactions.insert(0, txn.clone());
        tracing::debug!("added transaction {}", txn.id);
        self.commit(Collection::Transactions)?;
        Ok(txn)
    }

    /// Merge `patch` into the transaction. Changing the type re-checks the
    /// category; a category of the old type must be cleared or replaced in
    /// the same patch.
    pub fn update_transaction(&mut self, id: &str, patch: TransactionPatch) -> Result<Transaction> {
        let index = self
            .data
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Transaction, id))?;
        let current = &self.data.transactions[index];
        let mut next = current.clone();

        if let Some(description) = &patch.description {
            next.description = required_text("description", description)?;
        }
        if let Some(amount) = patch.amount {
            next.amount = positive_amount(amount)?;
        }
        if let Some(date) = &patch.date {
            next.date = parse_date(date)?;
        }
        if let Some(txn_type) = patch.txn_type {
            next.txn_type = txn_type;
        }
        if let Some(account_id) = patch.account_id {
            self.check_account(&account_id)?;
            next.account_id = account_id;
        }
        if let Some(category_id) = patch.category_id {
            next.category_id = non_empty_id(category_id);
        }
        if let Some(member_id) = patch.member_id {
            next.member_id = non_empty_id(member_id);
            if let Some(member_id) = &next.member_id {
                self.check_member(member_id)?;
            }
        }
        let type_changed = next.txn_type != current.txn_type;
        let category_changed = next.category_id != current.category_id;
        if type_changed || category_changed {
            if let Some(category_id) = &next.category_id {
                self.check_category_for(category_id, next.txn_type)?;
            }
        }

        if next == *current {
            return Ok(next);
        }
        self.data.transactions[index] = next.clone();
        tracing::debug!("updated transaction {id}");
        self.commit(Collection::Transactions)?;
        Ok(next)
    }

    pub fn remove_transaction(&mut self, id: &str) -> Result<Transaction> {
        let index = self
            .data
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Transaction, id))?;
        let removed = self.data.transactions.remove(index);
        tracing::debug!("removed transaction {id}");
        self.commit(Collection::Transactions)?;
        Ok(removed)
    }

    // ── Accounts ──────────────────────────────────────────────

    pub fn add_account(&mut self, new: NewAccount) -> Result<Account> {
        let account = Account {
            id: self.fresh_id(|id| self.account(id).is_some()),
            name: required_text("name", &new.name)?,
            account_type: new.account_type,
            balance: bounded_balance(new.balance)?,
            currency: currency_code(&new.currency)?,
        };
        self.data.accounts.push(account.clone());
        tracing::debug!("added account {}", account.id);
        self.commit(Collection::Accounts)?;
        Ok(account)
    }

    pub fn update_account(&mut self, id: &str, patch: AccountPatch) -> Result<Account> {
        let index = self
            .data
            .accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Account, id))?;
        let mut next = self.data.accounts[index].clone();

        if let Some(name) = &patch.name {
            next.name = required_text("name", name)?;
        }
        if let Some(account_type) = patch.account_type {
            next.account_type = account_type;
        }
        if let Some(balance) = patch.balance {
            next.balance = bounded_balance(balance)?;
        }
        if let Some(currency) = &patch.currency {
            next.currency = currency_code(currency)?;
        }

        if next == self.data.accounts[index] {
            return Ok(next);
        }
        self.data.accounts[index] = next.clone();
        tracing::debug!("updated account {id}");
        self.commit(Collection::Accounts)?;
        Ok(next)
    }

    pub fn remove_account(&mut self, id: &str) -> Result<Account> {
        let index = self
            .data
            .accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Account, id))?;
        let uses = self
            .data
            .transactions
            .iter()
            .filter(|t| t.account_id == id)
            .count();
        if uses > 0 {
            return Err(StoreError::integrity(
                EntityKind::Account,
                id,
                format!("referenced by {uses} transaction(s)"),
            ));
        }
        let removed = self.data.accounts.remove(index);
        tracing::debug!("removed account {id}");
        self.commit(Collection::Accounts)?;
        Ok(removed)
    }

    // ── Categories ────────────────────────────────────────────

    pub fn add_category(&mut self, new: NewCategory) -> Result<Category> {
        let name = required_text("name", &new.name)?;
        let parent_id = non_empty_id(new.parent_id);
        if let Some(parent_id) = &parent_id {
            let parent = self.category(parent_id).ok_or_else(|| {
                StoreError::reference("parentId", parent_id.as_str(), "does not exist")
            })?;
            if parent.category_type != new.category_type {
                return Err(StoreError::reference(
                    "parentId",
                    parent_id.as_str(),
                    format!(
                        "is an {} category but the new category is {}",
                        parent.category_type, new.category_type
                    ),
                ));
            }
            if !parent.is_root() {
                return Err(StoreError::reference(
                    "parentId",
                    parent_id.as_str(),
                    "is itself a subcategory",
                ));
            }
        }

        let category = Category {
            id: self.fresh_id(|id| self.category(id).is_some()),
            name,
            category_type: new.category_type,
            parent_id,
        };
        self.data.categories.push(category.clone());
        tracing::debug!("added category {}", category.id);
        self.commit(Collection::Categories)?;
        Ok(category)
    }

    pub fn remove_category(&mut self, id: &str) -> Result<Category> {
        let index = self
            .data
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Category, id))?;
        let uses = self
            .data
            .transactions
            .iter()
            .filter(|t| t.category_id.as_deref() == Some(id))
            .count();
        if uses > 0 {
            return Err(StoreError::integrity(
                EntityKind::Category,
                id,
                format!("referenced by {uses} transaction(s)"),
            ));
        }
        let children = self.category_children(id).len();
        if children > 0 {
            return Err(StoreError::integrity(
                EntityKind::Category,
                id,
                format!("parent of {children} categor{}", if children == 1 { "y" } else { "ies" }),
            ));
        }
        let removed = self.data.categories.remove(index);
        tracing::debug!("removed category {id}");
        self.commit(Collection::Categories)?;
        Ok(removed)
    }

    // ── Family members ────────────────────────────────────────

    pub fn add_family_member(&mut self, new: NewFamilyMember) -> Result<FamilyMember> {
        let name = required_text("name", &new.name)?;
        let email = email_address(&new.email)?;
        if new.role != Role::Admin && FamilyMember::admin_count(&self.data.family_members) == 0 {
            return Err(StoreError::validation(
                "role",
                "the first family member must be an admin",
            ));
        }

        let member = FamilyMember {
            id: self.fresh_id(|id| self.family_member(id).is_some()),
            name,
            email,
            role: new.role,
        };
        self.data.family_members.push(member.clone());
        tracing::debug!("added family member {}", member.id);
        self.commit(Collection::FamilyMembers)?;
        Ok(member)
    }

    pub fn remove_family_member(&mut self, id: &str) -> Result<FamilyMember> {
        let index = self
            .data
            .family_members
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::FamilyMember, id))?;
        let members = &self.data.family_members;
        if members[index].is_admin() && FamilyMember::admin_count(members) == 1 {
            return Err(StoreError::integrity(
                EntityKind::FamilyMember,
                id,
                "the last admin cannot be removed",
            ));
        }
        let uses = self
            .data
            .transactions
            .iter()
            .filter(|t| t.member_id.as_deref() == Some(id))
            .count();
        if uses > 0 {
            return Err(StoreError::integrity(
                EntityKind::FamilyMember,
                id,
                format!("referenced by {uses} transaction(s)"),
            ));
        }
        let removed = self.data.family_members.remove(index);
        tracing::debug!("removed family member {id}");
        self.commit(Collection::FamilyMembers)?;
        Ok(removed)
    }

    // ── Scenarios ─────────────────────────────────────────────

    pub fn add_scenario(&mut self, new: NewScenario) -> Result<Scenario> {
        let name = required_text("name", &new.name)?;
        if new.growth_rate <= Decimal::NEGATIVE_ONE {
            return Err(StoreError::validation(
                "growthRate",
                "must be greater than -1 (a total loss)",
            ));
        }
        if new.timeframe == 0 {
            return Err(StoreError::validation("timeframe", "must be at least one month"));
        }
        if new.timeframe > MAX_TIMEFRAME_MONTHS {
            return Err(StoreError::validation(
                "timeframe",
                format!("must be at most {MAX_TIMEFRAME_MONTHS} months"),
            ));
        }

        let scenario = Scenario {
            id: self.fresh_id(|id| self.data.scenarios.iter().any(|s| s.id == id)),
            name,
            description: new.description.trim().to_string(),
            growth_rate: new.growth_rate,
            timeframe: new.timeframe,
        };
        self.data.scenarios.push(scenario.clone());
        tracing::debug!("added scenario {}", scenario.id);
        self.commit(Collection::Scenarios)?;
        Ok(scenario)
    }

    pub fn remove_scenario(&mut self, id: &str) -> Result<Scenario> {
        let index = self
            .data
            .scenarios
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Scenario, id))?;
        let removed = self.data.scenarios.remove(index);
        tracing::debug!("removed scenario {id}");
        self.commit(Collection::Scenarios)?;
        Ok(removed)
    }

    // ── Internals ─────────────────────────────────────────────

    fn check_account(&self, account_id: &str) -> Result<()> {
        if self.account(account_id).is_none() {
            return Err(StoreError::reference("accountId", account_id, "does not exist"));
        }
        Ok(())
    }

    fn check_member(&self, member_id: &str) -> Result<()> {
        if self.family_member(member_id).is_none() {
            return Err(StoreError::reference("memberId", member_id, "does not exist"));
        }
        Ok(())
    }

    fn check_category_for(&self, category_id: &str, txn_type: FlowType) -> Result<()> {
        let category = self
            .category(category_id)
            .ok_or_else(|| StoreError::reference("categoryId", category_id, "does not exist"))?;
        if category.category_type != txn_type {
            return Err(StoreError::reference(
                "categoryId",
                category_id,
                format!(
                    "is an {} category but the transaction is {}",
                    category.category_type, txn_type
                ),
            ));
        }
        Ok(())
    }

    fn fresh_id(&self, taken: impl Fn(&str) -> bool) -> String {
        loop {
            let id = uuid::Uuid::new_v4().to_string();
            if !taken(&id) {
                return id;
            }
        }
    }

    /// Record an applied mutation and write the affected collection. The
    /// in-memory change stands even if the write fails.
    fn commit(&mut self, collection: Collection) -> Result<()> {
        self.revision += 1;
        self.persist(collection).inspect_err(|e| {
            tracing::warn!("change kept in memory only: {e}");
        })
    }

    fn persist(&mut self, collection: Collection) -> Result<()> {
        let key = collection.key();
        let encoded = match collection {
            Collection::Accounts => envelope::encode(&self.data.accounts),
            Collection::Categories => envelope::encode(&self.data.categories),
            Collection::FamilyMembers => envelope::encode(&self.data.family_members),
            Collection::Transactions => envelope::encode(&self.data.transactions),
            Collection::Scenarios => envelope::encode(&self.data.scenarios),
        }
        .map_err(|e| StoreError::Persistence {
            key,
            source: e.into(),
        })?;
        self.storage
            .set(key, &encoded)
            .map_err(|source| StoreError::Persistence { key, source })
    }

    fn differs_from(&self, before: &Collections, collection: Collection) -> bool {
        match collection {
            Collection::Accounts => self.data.accounts != before.accounts,
            Collection::Categories => self.data.categories != before.categories,
            Collection::FamilyMembers => self.data.family_members != before.family_members,
            Collection::Transactions => self.data.transactions != before.transactions,
            Collection::Scenarios => self.data.scenarios != before.scenarios,
        }
    }
}

fn load_collection<S, T>(
    storage: &S,
    key: &'static str,
    seed: fn() -> Vec<T>,
    report: &mut LoadReport,
) -> Result<Vec<T>>
where
    S: Storage,
    T: Serialize + DeserializeOwned,
{
    let raw = storage
        .get(key)
        .map_err(|source| StoreError::Persistence { key, source })?;
    let Some(raw) = raw else {
        tracing::info!("no stored \"{key}\", installing defaults");
        report.seeded.push(key);
        return Ok(seed());
    };
    match envelope::decode(&raw) {
        Ok(envelope::Decoded::Current(records)) => Ok(records),
        Ok(envelope::Decoded::Legacy(records)) => {
            tracing::info!("\"{key}\" uses the unversioned layout, will rewrite");
            report.migrated.push(key);
            Ok(records)
        }
        Err(e) => {
            tracing::warn!("stored \"{key}\" is unreadable ({e}), installing defaults");
            report.seeded.push(key);
            Ok(seed())
        }
    }
}

// ── Field validation ──────────────────────────────────────────

fn required_text(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::validation(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn positive_amount(amount: Decimal) -> Result<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(StoreError::validation(
            "amount",
            format!("must be greater than zero, got {amount}"),
        ));
    }
    if amount > Decimal::from(MAX_AMOUNT) {
        return Err(StoreError::validation(
            "amount",
            format!("must be at most {MAX_AMOUNT}, got {amount}"),
        ));
    }
    Ok(amount)
}

fn bounded_balance(balance: Decimal) -> Result<Decimal> {
    if balance.abs() > Decimal::from(MAX_AMOUNT) {
        return Err(StoreError::validation(
            "balance",
            format!("must be within ±{MAX_AMOUNT}, got {balance}"),
        ));
    }
    Ok(balance)
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| StoreError::validation("date", format!("\"{value}\" is not YYYY-MM-DD: {e}")))
}

/// Two to five ASCII letters or digits, stored upper-case ("BRL", "USDT").
fn currency_code(value: &str) -> Result<String> {
    let code = value.trim().to_uppercase();
    let valid = (2..=5).contains(&code.len()) && code.chars().all(|c| c.is_ascii_alphanumeric());
    if !valid {
        return Err(StoreError::validation(
            "currency",
            format!("\"{value}\" is not a currency code"),
        ));
    }
    Ok(code)
}

fn email_address(value: &str) -> Result<String> {
    let email = value.trim();
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
    if !valid {
        return Err(StoreError::validation(
            "email",
            format!("\"{value}\" is not an email address"),
        ));
    }
    Ok(email.to_string())
}
