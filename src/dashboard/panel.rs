use clap::ValueEnum;
use strum::{Display, EnumIter, IntoEnumIterator};

/// A named view section selecting which metrics render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, ValueEnum)]
pub enum Panel {
    /// KPI scorecards, yearly revenue, period comparison and recent orders.
    #[default]
    #[strum(serialize = "Geral")]
    #[value(name = "geral")]
    General,
    /// Profit and loss by month, revenue over the last 30 days.
    #[strum(serialize = "Financeiro")]
    #[value(name = "financeiro")]
    Financial,
    /// Menu engineering matrix.
    #[strum(serialize = "Menu")]
    #[value(name = "menu")]
    Menu,
    /// Stock levels and stock value.
    #[strum(serialize = "Estoque")]
    #[value(name = "estoque")]
    Inventory,
}

impl Panel {
    pub fn index(self) -> usize {
        Self::iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or_default()
    }

    pub fn previous(self) -> Self {
        match self.index() {
            0 => Self::iter().last().unwrap_or_default(),
            i => Self::from_index(i - 1).unwrap_or_default(),
        }
    }

    pub fn titles() -> Vec<String> {
        Self::iter().map(|p| p.to_string()).collect()
    }
}
