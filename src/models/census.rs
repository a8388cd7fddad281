//! Per-category resource counters.

use itertools::Itertools;
use std::fmt;
use std::ops::AddAssign;

/// A reported resource category.
///
/// `Serverless` is a roll-up of `FunctionApps` and `AppService` and is only
/// ever bumped through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    VirtualMachines,
    AksNodes,
    FunctionApps,
    AppService,
    Serverless,
}

impl Category {
    pub const COUNT: usize = 5;

    pub const ALL: [Category; Category::COUNT] = [
        Category::VirtualMachines,
        Category::AksNodes,
        Category::FunctionApps,
        Category::AppService,
        Category::Serverless,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::VirtualMachines => "Virtual Machines",
            Category::AksNodes => "AKS nodes",
            Category::FunctionApps => "Function Apps",
            Category::AppService => "App Service",
            Category::Serverless => "Serverless",
        }
    }

    /// The roll-up category this one also counts towards.
    pub fn rolls_up_to(self) -> Option<Category> {
        match self {
            Category::FunctionApps | Category::AppService => Some(Category::Serverless),
            _ => None,
        }
    }

    fn is_rollup(self) -> bool {
        Category::ALL
            .iter()
            .any(|c| c.rolls_up_to() == Some(self))
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resource counts for one subscription, or summed over many.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Census {
    counts: [u64; Category::COUNT],
}

impl Census {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `n` to `category` and to whatever it rolls up to.
    ///
    /// Roll-up categories cannot be added to directly.
    pub fn add(&mut self, category: Category, n: u64) {
        if category.is_rollup() {
            log::warn!("ignoring direct add of {n} to roll-up category {category}");
            return;
        }
        self.counts[category.index()] += n;
        if let Some(parent) = category.rolls_up_to() {
            self.counts[parent.index()] += n;
        }
    }

    pub fn get(&self, category: Category) -> u64 {
        self.counts[category.index()]
    }

    /// All categories with their counts, sorted by category name.
    pub fn sorted(&self) -> Vec<(Category, u64)> {
        Category::ALL
            .iter()
            .map(|&c| (c, self.get(c)))
            .sorted_by_key(|(c, _)| c.name())
            .collect()
    }
}

impl AddAssign<&Census> for Census {
    fn add_assign(&mut self, other: &Census) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }
}
