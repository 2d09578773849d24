use crate::{Catalog, CategorySpec, ValueType};

/// Catalog for a job monitoring search bar.
pub fn job_catalog() -> Catalog {
    Catalog::new()
        // Identifiers
        .with_category(job_id())
        .with_category(job_group())
        .with_category(owner())
        // Execution state
        .with_category(status())
        .with_category(minor_status())
        .with_category(site())
        .with_category(user_priority())
        .with_category(rescheduled())
        // Timestamps
        .with_category(submission_time())
        .with_category(last_update_time())
}

/// Numeric job identifier.
///
/// Practically unique per job, so its values are never listed.
pub fn job_id() -> CategorySpec {
    CategorySpec::new("JobID", ValueType::Number).with_hidden_suggestions()
}

pub fn job_group() -> CategorySpec {
    CategorySpec::new("JobGroup", ValueType::String)
}

pub fn owner() -> CategorySpec {
    CategorySpec::new("Owner", ValueType::String)
}

/// Major job status as reported by the workload manager.
pub fn status() -> CategorySpec {
    CategorySpec::new("Status", ValueType::String).with_values(&[
        "Submitting",
        "Received",
        "Checking",
        "Staging",
        "Waiting",
        "Matched",
        "Running",
        "Stalled",
        "Completing",
        "Done",
        "Completed",
        "Failed",
        "Deleted",
        "Killed",
        "Rescheduled",
    ])
}

pub fn minor_status() -> CategorySpec {
    CategorySpec::new("MinorStatus", ValueType::String).with_values(&[
        "Pilot Agent Submission",
        "Application",
        "Execution Complete",
        "Input Data Resolution",
        "Marked for termination",
    ])
}

pub fn site() -> CategorySpec {
    CategorySpec::new("Site", ValueType::String).with_values(&[
        "ANY",
        "LCG.CERN.ch",
        "LCG.IN2P3.fr",
        "LCG.RAL.uk",
    ])
}

pub fn user_priority() -> CategorySpec {
    CategorySpec::new("UserPriority", ValueType::Number).with_values(&["0", "1", "2", "3", "5", "10"])
}

/// Whether the job was sent back to the queue at least once.
pub fn rescheduled() -> CategorySpec {
    CategorySpec::new("Rescheduled", ValueType::Boolean)
}

pub fn submission_time() -> CategorySpec {
    CategorySpec::new("SubmissionTime", ValueType::Date)
}

pub fn last_update_time() -> CategorySpec {
    CategorySpec::new("LastUpdateTime", ValueType::Date)
}
