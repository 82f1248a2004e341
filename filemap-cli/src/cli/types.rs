use clap::ValueEnum;
use filemap_core::ApplyOrder;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl From<OutputFormat> for filemap_core::OutputFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OrderArg {
    /// Longest old filename first (deterministic)
    LongestFirst,
    /// Rename table order
    Table,
}

impl From<OrderArg> for ApplyOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::LongestFirst => Self::LongestFirst,
            OrderArg::Table => Self::Table,
        }
    }
}
