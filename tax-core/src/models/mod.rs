mod tax_schedule;
mod tax_summary;

pub use tax_schedule::{ScheduleError, ScheduleSet, TaxBracket, TaxSchedule};
pub use tax_summary::{LedgerEntry, TaxSummary, TaxTotals};
