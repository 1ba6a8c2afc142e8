//! Dashboard counters.

use std::future::Future;

use crate::farmacia_client::{ClientError, FarmaciaApi};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub medicamentos: usize,
    pub laboratorios: usize,
    pub ordenes: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatTile {
    pub title: &'static str,
    pub value: usize,
}

impl Stats {
    /// Tiles in display order.
    pub fn tiles(&self) -> [StatTile; 3] {
        [
            StatTile {
                title: "Medicamentos",
                value: self.medicamentos,
            },
            StatTile {
                title: "Laboratorios",
                value: self.laboratorios,
            },
            StatTile {
                title: "Órdenes de Compra",
                value: self.ordenes,
            },
        ]
    }
}

/// Fetch the three collections concurrently and count them.
///
/// Each fetch falls back to zero on its own, so one failing endpoint never
/// hides the other counts. Resolves once all three have settled.
pub async fn load_stats(api: &dyn FarmaciaApi) -> Stats {
    let (medicamentos, laboratorios, ordenes) = futures::join!(
        count_or_zero("medicamentos", api.list_medicamentos()),
        count_or_zero("laboratorios", api.list_laboratorios()),
        count_or_zero("ordenes-compra", api.list_ordenes_compra()),
    );

    let stats = Stats {
        medicamentos,
        laboratorios,
        ordenes,
    };
    tracing::debug!(?stats, "dashboard stats loaded");
    stats
}

async fn count_or_zero<T, F>(collection: &'static str, fetch: F) -> usize
where
    F: Future<Output = Result<Vec<T>, ClientError>>,
{
    match fetch.await {
        Ok(items) => items.len(),
        Err(err) => {
            tracing::warn!(collection, error = %err, "failed to load collection, counting as empty");
            0
        }
    }
}
