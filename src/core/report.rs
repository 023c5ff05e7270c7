use crate::core::aggregator::PostalAggregator;
use crate::domain::model::ReportEntry;
use std::fmt;

pub const NO_DATA_MESSAGE: &str = "No se encontraron datos para procesar.";

/// Per postal code summary, ascending by code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn from_aggregate(aggregate: &PostalAggregator) -> Self {
        let entries = aggregate
            .counts()
            .map(|(postal_code, settlements)| ReportEntry {
                postal_code: postal_code.to_string(),
                settlements,
            })
            .collect();

        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_postal_codes(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Código postal: {} - Número de asentamientos: {}",
            self.postal_code, self.settlements
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "{}", NO_DATA_MESSAGE);
        }

        writeln!(f)?;
        writeln!(f, "Resultados del análisis:")?;
        writeln!(f, "========================")?;
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        writeln!(f)?;
        writeln!(f, "Análisis completado.")?;
        writeln!(f, "Total de códigos postales procesados: {}", self.total_postal_codes())
    }
}
