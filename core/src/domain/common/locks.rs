use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

type Registry = Arc<StdMutex<HashMap<Uuid, Arc<Mutex<()>>>>>;

/// Single-writer gate per household.
///
/// Every operation that reads stock and writes it back holds the household guard for the
/// whole read-compute-write cycle, so two meal assignments of the same household never
/// reconcile against the same snapshot inside one process.
///
/// Entries only live while someone holds or waits for them.
#[derive(Debug, Clone, Default)]
pub struct HouseholdLocks {
    inflight: Registry,
}

/// Held for the duration of a household write. Dropping the last guard of a household
/// removes its entry from the registry.
#[derive(Debug)]
pub struct HouseholdGuard {
    inflight: Registry,
    household_id: Uuid,
    guard: Option<OwnedMutexGuard<()>>,
}

impl HouseholdLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, household_id: Uuid) -> HouseholdGuard {
        let lock = {
            let mut inflight = self.inflight.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(inflight.entry(household_id).or_default())
        };

        HouseholdGuard {
            inflight: Arc::clone(&self.inflight),
            household_id,
            guard: Some(lock.lock_owned().await),
        }
    }

    /// Households currently held or awaited.
    pub fn tracked(&self) -> usize {
        self.inflight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Drop for HouseholdGuard {
    fn drop(&mut self) {
        // The owned guard keeps its own reference to the mutex; release it before counting.
        drop(self.guard.take());

        let mut inflight = self.inflight.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(lock) = inflight.get(&self.household_id)
            && Arc::strong_count(lock) == 1
        {
            inflight.remove(&self.household_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn same_household_is_serialized() {
        let locks = HouseholdLocks::new();
        let household_id = Uuid::new_v4();

        let guard = locks.acquire(household_id).await;
        let second = tokio::time::timeout(Duration::from_millis(50), locks.acquire(household_id));
        assert!(second.await.is_err());

        drop(guard);
        let third = tokio::time::timeout(Duration::from_millis(50), locks.acquire(household_id));
        assert!(third.await.is_ok());
    }

    #[tokio::test]
    async fn other_households_are_independent() {
        let locks = HouseholdLocks::new();

        let _guard = locks.acquire(Uuid::new_v4()).await;
        let other = tokio::time::timeout(Duration::from_millis(50), locks.acquire(Uuid::new_v4()));
        assert!(other.await.is_ok());
    }

    #[tokio::test]
    async fn released_households_are_forgotten() {
        let locks = HouseholdLocks::new();

        for _ in 0..10 {
            let _guard = locks.acquire(Uuid::new_v4()).await;
            assert_eq!(locks.tracked(), 1);
        }

        assert_eq!(locks.tracked(), 0);
    }

    #[tokio::test]
    async fn entry_survives_while_a_writer_waits() {
        let locks = HouseholdLocks::new();
        let household_id = Uuid::new_v4();

        let first = locks.acquire(household_id).await;
        let waiter = {
            let locks = locks.clone();
            tokio::spawn(async move {
                let _guard = locks.acquire(household_id).await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        drop(first);
        assert_eq!(locks.tracked(), 1);

        waiter.await.unwrap();
        assert_eq!(locks.tracked(), 0);
    }
}
