//! Domain services

mod inventory_report;

pub use inventory_report::{
    generate_inventory_report, generate_kind_count_report, summarize, InventorySummary, KindCount,
};
