//! Static reference tables the UI resolves grouping keys against: spending
//! categories, payment methods, and profile avatars.
//!
//! Lookups never fail; unknown ids resolve to the catch-all entry so a
//! tampered record still renders.

/// Spending category descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDef {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

/// Payment method descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankDef {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

/// Profile avatar descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarDef {
    pub id: &'static str,
    pub emoji: &'static str,
    pub bg_color: &'static str,
}

/// Grouping key applied when a record carries no category or payment method.
pub const FALLBACK_KEY: &str = "other";

/// Payment method a new expense gets when the draft names none.
pub const DEFAULT_BANK: &str = "cash";

/// Avatar assigned at signup when none was picked.
pub const DEFAULT_AVATAR: &str = "avatar1";

/// Every selectable category. The final entry is the catch-all bucket.
pub const CATEGORIES: [CategoryDef; 10] = [
    CategoryDef { id: "food", name: "Food & Dining", color: "#f59e0b" },
    CategoryDef { id: "shopping", name: "Shopping", color: "#ec4899" },
    CategoryDef { id: "transport", name: "Transport", color: "#3b82f6" },
    CategoryDef { id: "housing", name: "Housing & Rent", color: "#8b5cf6" },
    CategoryDef { id: "health", name: "Health & Medical", color: "#ef4444" },
    CategoryDef { id: "entertainment", name: "Entertainment", color: "#06b6d4" },
    CategoryDef { id: "education", name: "Education", color: "#10b981" },
    CategoryDef { id: "gifts", name: "Gifts & Donations", color: "#f43f5e" },
    CategoryDef { id: "utilities", name: "Utilities & Bills", color: "#eab308" },
    CategoryDef { id: "other", name: "Other", color: "#71717a" },
];

/// Every selectable payment method. The final entry is the catch-all bucket.
pub const BANKS: [BankDef; 10] = [
    BankDef { id: "cash", name: "Cash", color: "#22c55e" },
    BankDef { id: "hdfc", name: "HDFC Bank", color: "#004c8f" },
    BankDef { id: "sbi", name: "State Bank of India", color: "#1a5baa" },
    BankDef { id: "icici", name: "ICICI Bank", color: "#f58220" },
    BankDef { id: "axis", name: "Axis Bank", color: "#800020" },
    BankDef { id: "kotak", name: "Kotak Mahindra", color: "#ed1c24" },
    BankDef { id: "paytm", name: "Paytm Wallet", color: "#00baf2" },
    BankDef { id: "gpay", name: "Google Pay", color: "#4285f4" },
    BankDef { id: "phonepe", name: "PhonePe", color: "#5f259f" },
    BankDef { id: "other", name: "Other", color: "#71717a" },
];

/// Selectable profile avatars. The first entry doubles as the default.
pub const AVATARS: [AvatarDef; 12] = [
    AvatarDef { id: "avatar1", emoji: "\u{1f60a}", bg_color: "#fef3c7" },
    AvatarDef { id: "avatar2", emoji: "\u{1f60e}", bg_color: "#dbeafe" },
    AvatarDef { id: "avatar3", emoji: "\u{1f98a}", bg_color: "#fed7aa" },
    AvatarDef { id: "avatar4", emoji: "\u{1f431}", bg_color: "#fce7f3" },
    AvatarDef { id: "avatar5", emoji: "\u{1f981}", bg_color: "#fef9c3" },
    AvatarDef { id: "avatar6", emoji: "\u{1f43c}", bg_color: "#e5e7eb" },
    AvatarDef { id: "avatar7", emoji: "\u{1f984}", bg_color: "#f3e8ff" },
    AvatarDef { id: "avatar8", emoji: "\u{1f438}", bg_color: "#d1fae5" },
    AvatarDef { id: "avatar9", emoji: "\u{1f916}", bg_color: "#cffafe" },
    AvatarDef { id: "avatar10", emoji: "\u{1f47b}", bg_color: "#f1f5f9" },
    AvatarDef { id: "avatar11", emoji: "\u{1f31f}", bg_color: "#fef08a" },
    AvatarDef { id: "avatar12", emoji: "\u{1f525}", bg_color: "#fecaca" },
];

/// Category for `id`, falling back to the catch-all entry.
pub fn category_by_id(id: &str) -> &'static CategoryDef {
    CATEGORIES
        .iter()
        .find(|entry| entry.id == id)
        .unwrap_or(&CATEGORIES[CATEGORIES.len() - 1])
}

/// Payment method for `id`, falling back to the catch-all entry.
pub fn bank_by_id(id: &str) -> &'static BankDef {
    BANKS
        .iter()
        .find(|entry| entry.id == id)
        .unwrap_or(&BANKS[BANKS.len() - 1])
}

/// Avatar for `id`, falling back to the default.
pub fn avatar_by_id(id: &str) -> &'static AvatarDef {
    AVATARS
        .iter()
        .find(|entry| entry.id == id)
        .unwrap_or(&AVATARS[0])
}
