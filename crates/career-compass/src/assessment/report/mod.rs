mod aggregate;
pub mod views;

pub use aggregate::{
    generate_career_report, generate_career_report_at, rank_recommendations, CareerReport,
};

pub(crate) use aggregate::assemble_report;
