// Catalog
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Implementation of the database abstraction that keeps all data in memory.
//!
//! The whole data set of a service is a single value of type `S`, typically a struct holding one
//! collection per entity.  A transaction holds an exclusive lock on the data set for as long as
//! it is alive, so transactions are fully serialized.  Modifications are applied to a staged
//! copy of the data and only become visible to other transactions once committed.

use crate::db::{BareTx, Db, DbResult};
use derivative::Derivative;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// An open transaction against a `MemoryDb` holding data of type `S`.
pub struct MemoryTx<S> {
    /// Lock on the shared data set, held until the transaction is committed or dropped.
    guard: OwnedMutexGuard<S>,

    /// Copy of the data set that receives all modifications done within the transaction.
    staged: S,
}

impl<S: Clone> MemoryTx<S> {
    /// Starts a new transaction on the data protected by `guard`.
    fn new(guard: OwnedMutexGuard<S>) -> Self {
        let staged = (*guard).clone();
        Self { guard, staged }
    }

    /// Returns a view of the data as seen by this transaction.
    pub fn data(&self) -> &S {
        &self.staged
    }

    /// Returns a mutable view of the data as seen by this transaction.
    pub fn data_mut(&mut self) -> &mut S {
        &mut self.staged
    }

    /// Publishes the staged modifications and releases the lock.
    pub fn commit(self) {
        let MemoryTx { mut guard, staged } = self;
        *guard = staged;
    }
}

/// A database instance backed by data stored in the current process.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct MemoryDb<S, T>
where
    S: Clone + Send + Sync + 'static,
    T: BareTx + From<MemoryTx<S>> + Send + Sync + 'static,
{
    /// The data set shared by all transactions.
    data: Arc<Mutex<S>>,

    /// Marker for the unused type `T`.
    _phantom_tx: PhantomData<T>,
}

impl<S, T> MemoryDb<S, T>
where
    S: Clone + Send + Sync + 'static,
    T: BareTx + From<MemoryTx<S>> + Send + Sync + 'static,
{
    /// Creates a new database whose initial contents are `data`.
    pub fn new(data: S) -> Self {
        Self { data: Arc::from(Mutex::from(data)), _phantom_tx: PhantomData }
    }
}

#[async_trait::async_trait]
impl<S, T> Db for MemoryDb<S, T>
where
    S: Clone + Send + Sync + 'static,
    T: BareTx + From<MemoryTx<S>> + Send + Sync + 'static,
{
    type RawTx = MemoryTx<S>;
    type Tx = T;

    async fn begin(&self) -> DbResult<Self::Tx> {
        let guard = self.data.clone().lock_owned().await;
        Ok(Self::Tx::from(MemoryTx::new(guard)))
    }
}
