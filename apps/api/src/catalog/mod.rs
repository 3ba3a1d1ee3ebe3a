// Catalog: static curriculum data (specializations, modules, roadmaps, jobs).
// Built once at startup and shared read-only; no locking needed.

pub mod data;
pub mod handlers;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Module {
    pub id: String,
    pub title: String,
    pub level: String,
    pub duration: String,
    pub description: String,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoadmapPhase {
    pub phase: u32,
    pub title: String,
    pub duration: String,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobListing {
    pub title: String,
    pub salary: String,
    pub growth: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Specialization {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub icon: String,
    pub modules: Vec<Module>,
    pub roadmap: Vec<RoadmapPhase>,
    pub jobs: Vec<JobListing>,
}

/// Listing view of a specialization, without its nested collections.
#[derive(Debug, Clone, Serialize)]
pub struct SpecializationSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub icon: String,
}

impl From<&Specialization> for SpecializationSummary {
    fn from(spec: &Specialization) -> Self {
        Self {
            id: spec.id.clone(),
            name: spec.name.clone(),
            description: spec.description.clone(),
            color: spec.color.clone(),
            icon: spec.icon.clone(),
        }
    }
}

/// Read-only store of every specialization, in display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    specializations: Vec<Specialization>,
}

impl Catalog {
    pub fn new(specializations: Vec<Specialization>) -> Self {
        Self { specializations }
    }

    /// The four built-in tracks: `it`, `se`, `ds`, `im`.
    pub fn builtin() -> Self {
        Self::new(data::builtin_specializations())
    }

    pub fn summaries(&self) -> Vec<SpecializationSummary> {
        self.specializations.iter().map(Into::into).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Specialization> {
        self.specializations.iter().find(|s| s.id == id)
    }
}
