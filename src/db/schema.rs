/// Column layout shared by every month partition, in insert/select order.
pub(crate) const COLUMNS: &[(&str, &str)] = &[
    ("Date", "TEXT"),
    ("Category", "TEXT"),
    ("Payment_Mode", "TEXT"),
    ("Description", "TEXT"),
    ("Amount_Paid", "REAL"),
    ("Cashback", "REAL"),
    ("Month", "TEXT"),
];

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// `CREATE TABLE IF NOT EXISTS` for one partition. No keys, no indexes.
pub(crate) fn partition_ddl(table: &str) -> String {
    let columns = COLUMNS
        .iter()
        .map(|(name, ty)| format!("    {name} {ty}"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("CREATE TABLE IF NOT EXISTS {table} (\n{columns}\n);")
}

pub(crate) fn column_list() -> String {
    COLUMNS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn insert_sql(table: &str) -> String {
    let placeholders = (1..=COLUMNS.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {table} ({}) VALUES ({placeholders})",
        column_list()
    )
}
