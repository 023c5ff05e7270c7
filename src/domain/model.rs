/// One settlement / postal code pair taken from a data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub postal_code: String,
    pub settlement: String,
}

/// 報表中的一列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub postal_code: String,
    pub settlements: usize,
}
