#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanStats {
    pub lines_read: usize,
    pub unique_domains: usize,
    pub duplicates_dropped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    /// Cleaned domains, deduplicated and sorted byte-wise.
    pub domains: Vec<String>,
    pub stats: CleanStats,
}
