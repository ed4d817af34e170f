/// Fixed lookup lists the generator draws from.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub categories: &'static [&'static str],
    pub payment_modes: &'static [&'static str],
    pub descriptions: &'static [&'static str],
}

impl Catalog {
    pub const STANDARD: Catalog = Catalog {
        categories: CATEGORIES,
        payment_modes: PAYMENT_MODES,
        descriptions: DESCRIPTIONS,
    };
}

pub const CATEGORIES: &[&str] = &[
    "Food",
    "Transportation",
    "Bills",
    "Groceries",
    "Entertainment",
    "Healthcare",
    "Shopping",
    "Dining",
    "Travel",
    "Education",
    "Electricity",
    "Household Items",
    "Festive Expenses",
];

pub const PAYMENT_MODES: &[&str] = &[
    "Cash",
    "Online",
    "NetBanking",
    "Credit Card",
    "Debit Card",
    "Wallet",
];

pub const DESCRIPTIONS: &[&str] = &[
    "Bought vegetables",
    "Paid electricity bill",
    "School fees payment",
    "Gas cylinder refill",
    "Groceries for home",
    "Milk and dairy items",
    "Medicine purchase",
    "Mobile recharge",
    "Monthly rent",
    "Dining at a restaurant",
    "Purchase of stationery",
    "House cleaning items",
    "Temple donation",
    "Shopping at local market",
    "Water bill payment",
    "Internet recharge",
    "Cable TV subscription",
    "New clothes purchase",
    "Repair work at home",
    "Train ticket booking",
    "Bus pass renewal",
    "Housemaid salary",
    "Fruit purchase",
    "Doctor consultation fee",
    "Car petrol refill",
    "Bike service expense",
    "Festival decorations",
    "Gift for a family member",
    "Newspaper subscription",
];
