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
//! `WeteeWorker` pallet: worker cluster registration, mortgage and proofs.

use super::RuntimeCall;
use crate::storage::Address;
use crate::types::{
    AccountId32, Balance, BlockNumber, ContractState, Ip, K8sCluster, ProofOfWork, WorkId,
};
use parity_scale_codec::{Decode, Encode};

/// Pallet name.
pub const PALLET: &str = "WeteeWorker";

/// Dispatchable calls.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub enum Call {
    /// Register a worker cluster.
    #[codec(index = 0)]
    ClusterRegister {
        /// Cluster name
        name: Vec<u8>,
        /// Public addresses
        ip: Vec<Ip>,
        /// Public port
        port: u32,
        /// Service level
        level: u8,
    },
    /// Pledge resources and deposit to a cluster.
    #[codec(index = 1)]
    ClusterMortgage {
        /// Cluster id
        id: u64,
        /// CPU cores
        cpu: u32,
        /// Memory in MB
        mem: u32,
        /// Confidential VM cores
        cvm_cpu: u32,
        /// Confidential VM memory in MB
        cvm_mem: u32,
        /// Disk in GB
        disk: u32,
        /// GPUs
        gpu: u32,
        /// Deposit
        deposit: Balance,
    },
    /// Release the mortgage made at a block.
    #[codec(index = 2)]
    ClusterUnmortgage {
        /// Cluster id
        id: u64,
        /// Block the mortgage was made at
        block_num: BlockNumber,
    },
    /// Withdraw earnings of a workload.
    #[codec(index = 3)]
    ClusterWithdrawal {
        /// Workload
        id: WorkId,
        /// Amount
        val: Balance,
    },
    /// Stop a cluster.
    #[codec(index = 4)]
    ClusterStop {
        /// Cluster id
        id: u64,
    },
    /// Report a misbehaving workload on a cluster.
    #[codec(index = 5)]
    ClusterReport {
        /// Cluster id
        cluster_id: u64,
        /// Workload
        work_id: WorkId,
        /// Reason
        reason: Vec<u8>,
    },
    /// Close a report.
    #[codec(index = 6)]
    ReportClose {
        /// Cluster id
        cluster_id: u64,
        /// Workload
        work_id: WorkId,
    },
    /// Upload a proof of work and an attestation report.
    #[codec(index = 7)]
    WorkProofUpload {
        /// Workload
        work_id: WorkId,
        /// Proof of work
        proof: Option<ProofOfWork>,
        /// Attestation report
        report: Option<Vec<u8>>,
    },
}

/// Call builders.
pub struct TransactionApi;

impl TransactionApi {
    /// Build `WeteeWorker::cluster_register`.
    pub fn cluster_register(&self, name: Vec<u8>, ip: Vec<Ip>, port: u32, level: u8) -> RuntimeCall {
        RuntimeCall::WeteeWorker(Call::ClusterRegister {
            name,
            ip,
            port,
            level,
        })
    }

    /// Build `WeteeWorker::cluster_mortgage`.
    #[allow(clippy::too_many_arguments)]
    pub fn cluster_mortgage(
        &self,
        id: u64,
        cpu: u32,
        mem: u32,
        cvm_cpu: u32,
        cvm_mem: u32,
        disk: u32,
        gpu: u32,
        deposit: Balance,
    ) -> RuntimeCall {
        RuntimeCall::WeteeWorker(Call::ClusterMortgage {
            id,
            cpu,
            mem,
            cvm_cpu,
            cvm_mem,
            disk,
            gpu,
            deposit,
        })
    }

    /// Build `WeteeWorker::cluster_unmortgage`.
    pub fn cluster_unmortgage(&self, id: u64, block_num: BlockNumber) -> RuntimeCall {
        RuntimeCall::WeteeWorker(Call::ClusterUnmortgage { id, block_num })
    }

    /// Build `WeteeWorker::cluster_withdrawal`.
    pub fn cluster_withdrawal(&self, id: WorkId, val: Balance) -> RuntimeCall {
        RuntimeCall::WeteeWorker(Call::ClusterWithdrawal { id, val })
    }

    /// Build `WeteeWorker::cluster_stop`.
    pub fn cluster_stop(&self, id: u64) -> RuntimeCall {
        RuntimeCall::WeteeWorker(Call::ClusterStop { id })
    }

    /// Build `WeteeWorker::cluster_report`.
    pub fn cluster_report(&self, cluster_id: u64, work_id: WorkId, reason: Vec<u8>) -> RuntimeCall {
        RuntimeCall::WeteeWorker(Call::ClusterReport {
            cluster_id,
            work_id,
            reason,
        })
    }

    /// Build `WeteeWorker::report_close`.
    pub fn report_close(&self, cluster_id: u64, work_id: WorkId) -> RuntimeCall {
        RuntimeCall::WeteeWorker(Call::ReportClose {
            cluster_id,
            work_id,
        })
    }

    /// Build `WeteeWorker::work_proof_upload`.
    pub fn work_proof_upload(
        &self,
        work_id: WorkId,
        proof: Option<ProofOfWork>,
        report: Option<Vec<u8>>,
    ) -> RuntimeCall {
        RuntimeCall::WeteeWorker(Call::WorkProofUpload {
            work_id,
            proof,
            report,
        })
    }
}

/// Storage addresses.
pub struct StorageApi;

impl StorageApi {
    /// Id the next registered cluster gets.
    pub fn next_cluster_id(&self) -> Address<u64> {
        Address::plain(PALLET, "NextClusterId")
    }

    /// Cluster by id.
    pub fn k8s_clusters(&self, id: u64) -> Address<K8sCluster> {
        Address::map(PALLET, "K8sClusters", vec![id.encode()])
    }

    /// Cluster id owned by an account.
    pub fn k8s_cluster_accounts(&self, account: &AccountId32) -> Address<u64> {
        Address::map(PALLET, "K8sClusterAccounts", vec![account.encode()])
    }

    /// Settlement state of a workload.
    pub fn work_contracts(&self, work_id: &WorkId) -> Address<ContractState> {
        Address::map(PALLET, "WorkContracts", vec![work_id.encode()])
    }

    /// Proof of work uploaded for a workload at a block.
    pub fn proofs_of_work(&self, work_id: &WorkId, block: BlockNumber) -> Address<ProofOfWork> {
        Address::map(
            PALLET,
            "ProofsOfWork",
            vec![work_id.encode(), block.encode()],
        )
    }
}
