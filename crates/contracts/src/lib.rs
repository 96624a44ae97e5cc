pub mod profit;

pub use profit::{
    coerce_number, compute_profit, round2, FormEntry, ProfitRecord, ProfitResult,
};
