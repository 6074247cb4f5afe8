///////////////////////////////////////////////////////////////////////////////
//
//  Copyright 2018-2026 Robonomics Network <research@robonomics.network>
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
//
///////////////////////////////////////////////////////////////////////////////
//! Wetee runtime calls and storage addresses.
//!
//! Mirrors the layout of subxt generated APIs:
//! - **Transactions**: `tx().pallet_name().call_name(...)` returns a [`RuntimeCall`]
//! - **Storage**: `storage().pallet_name().item_name(...)` returns an [`Address`]
//!
//! # Examples
//!
//! ```
//! use parity_scale_codec::Encode;
//! use wetee_client::runtime::{tx, RuntimeCall};
//!
//! let call = tx().system().remark(vec![1, 2, 3]);
//! assert_eq!(call.encode(), vec![0, 0, 12, 1, 2, 3]);
//! assert_eq!(call.indices(), (0, 0));
//! ```
//!
//! [`Address`]: crate::storage::Address

pub mod aura;
pub mod balances;
pub mod parachain_info;
pub mod system;
pub mod timestamp;
pub mod wetee_app;
pub mod wetee_bridge;
pub mod wetee_dsecret;
pub mod wetee_gpu;
pub mod wetee_task;
pub mod wetee_worker;
pub mod xcmp_queue;

use crate::error::Result;
use crate::metadata::Metadata;
use parity_scale_codec::{Decode, Encode};

/// Any dispatchable call of the Wetee runtime.
///
/// Outer variant index is the pallet index, inner variant index the call
/// index, so the SCALE encoding is `[pallet, call, args...]`.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub enum RuntimeCall {
    /// `System` calls
    #[codec(index = 0)]
    System(system::Call),
    /// `Timestamp` calls
    #[codec(index = 2)]
    Timestamp(timestamp::Call),
    /// `Balances` calls
    #[codec(index = 10)]
    Balances(balances::Call),
    /// `XcmpQueue` calls
    #[codec(index = 30)]
    XcmpQueue(xcmp_queue::Call),
    /// `WeteeWorker` calls
    #[codec(index = 50)]
    WeteeWorker(wetee_worker::Call),
    /// `WeteeApp` calls
    #[codec(index = 51)]
    WeteeApp(wetee_app::Call),
    /// `WeteeTask` calls
    #[codec(index = 52)]
    WeteeTask(wetee_task::Call),
    /// `WeteeGpu` calls
    #[codec(index = 53)]
    WeteeGpu(wetee_gpu::Call),
    /// `WeteeDsecret` calls
    #[codec(index = 54)]
    WeteeDsecret(wetee_dsecret::Call),
    /// `WeteeBridge` calls
    #[codec(index = 55)]
    WeteeBridge(wetee_bridge::Call),
}

impl RuntimeCall {
    /// Pallet and call index of this call.
    pub fn indices(&self) -> (u8, u8) {
        // Every variant encodes at least the two index bytes.
        self.using_encoded(|bytes| (bytes[0], bytes[1]))
    }

    /// Name of the pallet this call belongs to.
    pub fn pallet_name(&self) -> &'static str {
        match self {
            RuntimeCall::System(_) => system::PALLET,
            RuntimeCall::Timestamp(_) => timestamp::PALLET,
            RuntimeCall::Balances(_) => balances::PALLET,
            RuntimeCall::XcmpQueue(_) => xcmp_queue::PALLET,
            RuntimeCall::WeteeWorker(_) => wetee_worker::PALLET,
            RuntimeCall::WeteeApp(_) => wetee_app::PALLET,
            RuntimeCall::WeteeTask(_) => wetee_task::PALLET,
            RuntimeCall::WeteeGpu(_) => wetee_gpu::PALLET,
            RuntimeCall::WeteeDsecret(_) => wetee_dsecret::PALLET,
            RuntimeCall::WeteeBridge(_) => wetee_bridge::PALLET,
        }
    }

    /// Pallet and call names as described by the registry.
    pub fn describe<'a>(&self, metadata: &'a Metadata) -> Result<(&'a str, &'a str)> {
        let (pallet, call) = self.indices();
        let (pallet, call) = metadata.call_by_index(pallet, call)?;
        Ok((&pallet.name, &call.name))
    }

    /// `0x` prefixed hex of the encoded call.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.encode()))
    }
}

/// Entry point of the call builders.
pub fn tx() -> TransactionApi {
    TransactionApi
}

/// Call builders of every pallet.
pub struct TransactionApi;

impl TransactionApi {
    /// `System` calls.
    pub fn system(&self) -> system::TransactionApi {
        system::TransactionApi
    }

    /// `Timestamp` calls.
    pub fn timestamp(&self) -> timestamp::TransactionApi {
        timestamp::TransactionApi
    }

    /// `Balances` calls.
    pub fn balances(&self) -> balances::TransactionApi {
        balances::TransactionApi
    }

    /// `XcmpQueue` calls.
    pub fn xcmp_queue(&self) -> xcmp_queue::TransactionApi {
        xcmp_queue::TransactionApi
    }

    /// `WeteeWorker` calls.
    pub fn wetee_worker(&self) -> wetee_worker::TransactionApi {
        wetee_worker::TransactionApi
    }

    /// `WeteeApp` calls.
    pub fn wetee_app(&self) -> wetee_app::TransactionApi {
        wetee_app::TransactionApi
    }

    /// `WeteeTask` calls.
    pub fn wetee_task(&self) -> wetee_task::TransactionApi {
        wetee_task::TransactionApi
    }

    /// `WeteeGpu` calls.
    pub fn wetee_gpu(&self) -> wetee_gpu::TransactionApi {
        wetee_gpu::TransactionApi
    }

    /// `WeteeDsecret` calls.
    pub fn wetee_dsecret(&self) -> wetee_dsecret::TransactionApi {
        wetee_dsecret::TransactionApi
    }

    /// `WeteeBridge` calls.
    pub fn wetee_bridge(&self) -> wetee_bridge::TransactionApi {
        wetee_bridge::TransactionApi
    }
}

/// Entry point of the storage addresses.
pub fn storage() -> StorageApi {
    StorageApi
}

/// Storage addresses of every pallet.
pub struct StorageApi;

impl StorageApi {
    /// `System` storage.
    pub fn system(&self) -> system::StorageApi {
        system::StorageApi
    }

    /// `Timestamp` storage.
    pub fn timestamp(&self) -> timestamp::StorageApi {
        timestamp::StorageApi
    }

    /// `ParachainInfo` storage.
    pub fn parachain_info(&self) -> parachain_info::StorageApi {
        parachain_info::StorageApi
    }

    /// `Balances` storage.
    pub fn balances(&self) -> balances::StorageApi {
        balances::StorageApi
    }

    /// `Aura` storage.
    pub fn aura(&self) -> aura::StorageApi {
        aura::StorageApi
    }

    /// `XcmpQueue` storage.
    pub fn xcmp_queue(&self) -> xcmp_queue::StorageApi {
        xcmp_queue::StorageApi
    }

    /// `WeteeWorker` storage.
    pub fn wetee_worker(&self) -> wetee_worker::StorageApi {
        wetee_worker::StorageApi
    }

    /// `WeteeApp` storage.
    pub fn wetee_app(&self) -> wetee_app::StorageApi {
        wetee_app::StorageApi
    }

    /// `WeteeTask` storage.
    pub fn wetee_task(&self) -> wetee_task::StorageApi {
        wetee_task::StorageApi
    }

    /// `WeteeGpu` storage.
    pub fn wetee_gpu(&self) -> wetee_gpu::StorageApi {
        wetee_gpu::StorageApi
    }

    /// `WeteeDsecret` storage.
    pub fn wetee_dsecret(&self) -> wetee_dsecret::StorageApi {
        wetee_dsecret::StorageApi
    }

    /// `WeteeBridge` storage.
    pub fn wetee_bridge(&self) -> wetee_bridge::StorageApi {
        wetee_bridge::StorageApi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::metadata::StorageModifier;
    use crate::storage::{Address, MemoryState, Storage};
    use crate::types::*;
    use std::collections::HashSet;

    fn alice() -> AccountId32 {
        AccountId32([1u8; 32])
    }

    fn price() -> Price {
        Price {
            cpu_per: 1,
            cvm_cpu_per: 2,
            memory_per: 3,
            cvm_memory_per: 4,
            disk_per: 5,
            gpu_per: 6,
        }
    }

    fn create_args() -> (Vec<Service>, Command, Vec<EnvInput>, Vec<Disk>) {
        (
            vec![Service::Http(80), Service::Tcp(22)],
            Command::Sh(b"run.sh".to_vec()),
            vec![EnvInput {
                etype: EnvType::Env,
                k: b"MODE".to_vec(),
                v: b"prod".to_vec(),
                index: 0,
            }],
            vec![Disk {
                path: DiskClass::Ssd(b"/data".to_vec()),
                size: 10,
            }],
        )
    }

    /// One call per dispatchable of the runtime.
    fn every_call() -> Vec<RuntimeCall> {
        let (port, command, env, disk) = create_args();
        let work = WorkId::app(3);
        let mut calls = vec![
            tx().system().remark(b"hi".to_vec()),
            tx().system().remark_with_event(b"hi".to_vec()),
            tx().timestamp().set(1_700_000_000_000),
            tx().balances()
                .transfer_allow_death(MultiAddress::Id(alice()), 1_000),
            tx().balances()
                .transfer_keep_alive(MultiAddress::Id(alice()), 1_000),
            tx().xcmp_queue().suspend_xcm_execution(),
            tx().xcmp_queue().resume_xcm_execution(),
            tx().xcmp_queue().update_suspend_threshold(40),
            tx().xcmp_queue().update_drop_threshold(60),
            tx().xcmp_queue().update_resume_threshold(10),
            tx().wetee_worker().cluster_register(
                b"c1".to_vec(),
                vec![Ip {
                    ipv4: Some(0x7f000001),
                    ipv6: None,
                    domain: None,
                }],
                8080,
                1,
            ),
            tx().wetee_worker()
                .cluster_mortgage(1, 8, 16_384, 4, 8_192, 500, 1, 10_000),
            tx().wetee_worker().cluster_unmortgage(1, 42),
            tx().wetee_worker().cluster_withdrawal(work, 5),
            tx().wetee_worker().cluster_stop(1),
            tx().wetee_worker()
                .cluster_report(1, work, b"down".to_vec()),
            tx().wetee_worker().report_close(1, work),
            tx().wetee_worker().work_proof_upload(
                work,
                Some(ProofOfWork::default()),
                None,
            ),
            tx().wetee_app().restart(3),
            tx().wetee_app().stop(3),
            tx().wetee_app().update_price(1, price()),
            tx().wetee_app().charge(3, 100),
            tx().wetee_task().rerun(4),
            tx().wetee_task().update_price(1, price()),
            tx().wetee_task().charge(4, 100),
            tx().wetee_gpu().restart(5),
            tx().wetee_gpu().stop(5),
            tx().wetee_gpu().update_price(1, price()),
            tx().wetee_gpu().charge(5, 100),
            tx().wetee_dsecret().register_node([7u8; 32]),
            tx().wetee_dsecret()
                .upload_code_mrenclave(vec![1; 32], vec![2; 32]),
            tx().wetee_bridge()
                .call_tee(work, 1, vec![0xaa], Some(vec![0xbb])),
            tx().wetee_bridge().respond(9, vec![0xcc]),
        ];

        let spec = |name: &str, image: &str, cpu, memory, tee_version| WorkloadSpec {
            name: name.as_bytes().to_vec(),
            image: image.as_bytes().to_vec(),
            meta: vec![],
            port: port.clone(),
            command: command.clone(),
            env: env.clone(),
            cpu,
            memory,
            disk: disk.clone(),
            gpu: 0,
            level: 1,
            tee_version,
            deposit: 1_000,
        };
        let app = spec("app", "nginx:latest", 1, 1024, TeeVersion::Cvm);
        calls.push(tx().wetee_app().create(app));
        calls.push(tx().wetee_task().create(spec("task", "busybox", 1, 512, TeeVersion::Sgx)));
        calls.push(tx().wetee_gpu().create(WorkloadSpec {
            gpu: 1,
            level: 2,
            ..spec("gpu", "llama:7b", 8, 32_768, TeeVersion::Cvm)
        }));
        calls.push(tx().wetee_app().update(WorkloadUpdate {
            new_name: Some(b"renamed".to_vec()),
            new_cpu: Some(0),
            ..WorkloadUpdate::new(3)
        }));
        calls.push(tx().wetee_task().update(WorkloadUpdate::new(4)));
        calls.push(tx().wetee_gpu().update(WorkloadUpdate {
            new_image: Some(b"llama:13b".to_vec()),
            new_command: Some(Command::None),
            new_gpu: Some(2),
            ..WorkloadUpdate::new(5)
        }));
        calls
    }

    #[test]
    fn test_remark_encoding() {
        let call = tx().system().remark(vec![1, 2, 3]);
        assert_eq!(call.encode(), vec![0, 0, 12, 1, 2, 3]);
        assert_eq!(call.to_hex(), "0x00000c010203");
    }

    #[test]
    fn test_rerun_encoding() {
        let call = tx().wetee_task().rerun(1);
        assert_eq!(call.encode(), vec![52, 2, 1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(call.pallet_name(), "WeteeTask");
    }

    #[test]
    fn test_update_layout_matches_call_arguments() {
        let call = tx().wetee_task().update(WorkloadUpdate::new(1));
        let mut expected = vec![52, 1, 1, 0, 0, 0, 0, 0, 0, 0];
        expected.extend_from_slice(&[0; 8]);
        assert_eq!(call.encode(), expected);
    }

    #[test]
    fn test_every_call_roundtrips() {
        for call in every_call() {
            let encoded = call.encode();
            let decoded = RuntimeCall::decode(&mut &encoded[..]).unwrap();
            assert_eq!(decoded, call);
        }
    }

    #[test]
    fn test_every_call_is_described_by_registry() {
        let metadata = Metadata::wetee();
        let mut seen = HashSet::new();
        for call in every_call() {
            let (pallet, name) = call.describe(&metadata).unwrap();
            assert_eq!(pallet, call.pallet_name());
            seen.insert((pallet.to_string(), name.to_string()));
        }

        let registered: HashSet<_> = metadata
            .pallets
            .iter()
            .flat_map(|p| p.calls.iter().map(move |c| (p.name.clone(), c.name.clone())))
            .collect();
        assert_eq!(seen, registered);
    }

    #[test]
    fn test_update_distinguishes_none_from_zero() {
        let none = tx().wetee_app().update(WorkloadUpdate::new(3));
        let zero = tx().wetee_app().update(WorkloadUpdate {
            new_cpu: Some(0),
            ..WorkloadUpdate::new(3)
        });
        assert_ne!(none.encode(), zero.encode());
        assert_eq!(zero.encode().len(), none.encode().len() + 4);
    }

    #[test]
    fn test_compact_arguments() {
        let call = tx().balances().transfer_keep_alive(MultiAddress::Id(alice()), 1);
        let encoded = call.encode();
        // pallet, call, address variant, 32 byte account, compact 1
        assert_eq!(encoded.len(), 2 + 1 + 32 + 1);
        assert_eq!(encoded[encoded.len() - 1], 0x04);
    }

    async fn resolve<V: Decode + std::fmt::Debug>(
        reader: &Storage<MemoryState>,
        address: Address<V>,
        resolved: &mut Vec<(&'static str, &'static str)>,
    ) {
        let (pallet, item) = (address.pallet_name(), address.item_name());
        let metadata = reader.metadata();
        address
            .to_key(metadata)
            .unwrap_or_else(|e| panic!("{pallet}::{item}: {e}"));

        let entry = metadata.storage_entry(pallet, item).unwrap();
        let value = reader.fetch_or_default_latest(&address).await;
        match entry.modifier {
            StorageModifier::Default => assert!(value.is_ok(), "{pallet}::{item}: {value:?}"),
            StorageModifier::Optional => {
                assert!(
                    matches!(value, Err(Error::NoDefault { .. })),
                    "{pallet}::{item} should have no default"
                )
            }
        }
        resolved.push((pallet, item));
    }

    #[tokio::test]
    async fn test_every_storage_address_matches_registry() {
        let reader = Storage::new(MemoryState::new(), Metadata::wetee());
        let work = WorkId::app(1);
        let mut resolved = Vec::new();
        let r = &mut resolved;

        resolve(&reader, storage().system().number(), r).await;
        resolve(&reader, storage().system().block_hash(1), r).await;
        resolve(&reader, storage().system().extrinsic_count(), r).await;
        resolve(&reader, storage().timestamp().now(), r).await;
        resolve(&reader, storage().parachain_info().parachain_id(), r).await;
        resolve(&reader, storage().balances().total_issuance(), r).await;
        resolve(&reader, storage().aura().authorities(), r).await;
        resolve(&reader, storage().aura().current_slot(), r).await;
        resolve(&reader, storage().xcmp_queue().queue_suspended(), r).await;
        resolve(&reader, storage().xcmp_queue().queue_config(), r).await;
        resolve(&reader, storage().wetee_worker().next_cluster_id(), r).await;
        resolve(&reader, storage().wetee_worker().k8s_clusters(1), r).await;
        resolve(&reader, storage().wetee_worker().k8s_cluster_accounts(&alice()), r).await;
        resolve(&reader, storage().wetee_worker().work_contracts(&work), r).await;
        resolve(&reader, storage().wetee_worker().proofs_of_work(&work, 1), r).await;
        resolve(&reader, storage().wetee_app().next_tee_id(), r).await;
        resolve(&reader, storage().wetee_app().tee_apps(&alice(), 1), r).await;
        resolve(&reader, storage().wetee_app().app_id_accounts(1), r).await;
        resolve(&reader, storage().wetee_app().prices(1), r).await;
        resolve(&reader, storage().wetee_task().next_tee_id(), r).await;
        resolve(&reader, storage().wetee_task().tee_tasks(&alice(), 1), r).await;
        resolve(&reader, storage().wetee_task().task_id_accounts(1), r).await;
        resolve(&reader, storage().wetee_task().prices(1), r).await;
        resolve(&reader, storage().wetee_gpu().next_app_id(), r).await;
        resolve(&reader, storage().wetee_gpu().gpu_apps(&alice(), 1), r).await;
        resolve(&reader, storage().wetee_gpu().app_id_accounts(1), r).await;
        resolve(&reader, storage().wetee_gpu().prices(1), r).await;
        resolve(&reader, storage().wetee_dsecret().next_node_id(), r).await;
        resolve(&reader, storage().wetee_dsecret().nodes(1), r).await;
        resolve(&reader, storage().wetee_dsecret().code_mrenclave(), r).await;
        resolve(&reader, storage().wetee_dsecret().code_mrsigner(), r).await;
        resolve(&reader, storage().wetee_bridge().next_tee_call_id(), r).await;
        resolve(&reader, storage().wetee_bridge().tee_calls(1), r).await;

        let unique: HashSet<_> = resolved.iter().copied().collect();
        assert_eq!(unique.len(), resolved.len(), "item addressed twice");

        let registered: HashSet<_> = reader
            .metadata()
            .pallets
            .iter()
            .flat_map(|p| p.storage.iter().map(move |e| (p.name.as_str(), e.name.as_str())))
            .collect();
        assert_eq!(unique, registered);
    }
}
