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
//! Type definitions shared by Wetee pallets.
//!
//! All types are SCALE compatible with their runtime counterparts; field
//! order is part of the wire format.

use parity_scale_codec::{Decode, Encode};

pub use subxt::utils::{AccountId32, MultiAddress, H256};

/// Block hash of the Wetee chain.
pub type BlockHash = H256;

/// Block number of the Wetee chain.
pub type BlockNumber = u32;

/// Native token balance.
pub type Balance = u128;

/// Kind of workload running on a cluster.
#[derive(Encode, Decode, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkType {
    /// Long-running service
    App,
    /// Run-to-completion task
    Task,
    /// GPU workload
    Gpu,
}

/// Workload identifier.
#[derive(Encode, Decode, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WorkId {
    /// Workload kind
    pub wtype: WorkType,
    /// Id within the kind
    pub id: u64,
}

impl WorkId {
    /// App workload id.
    pub fn app(id: u64) -> Self {
        Self {
            wtype: WorkType::App,
            id,
        }
    }

    /// Task workload id.
    pub fn task(id: u64) -> Self {
        Self {
            wtype: WorkType::Task,
            id,
        }
    }

    /// GPU workload id.
    pub fn gpu(id: u64) -> Self {
        Self {
            wtype: WorkType::Gpu,
            id,
        }
    }
}

/// Cluster network address.
#[derive(Encode, Decode, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ip {
    /// IPv4 address
    pub ipv4: Option<u32>,
    /// IPv6 address
    pub ipv6: Option<u128>,
    /// Domain name
    pub domain: Option<Vec<u8>>,
}

/// Port exposed by a workload.
#[derive(Encode, Decode, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Service {
    /// TCP port
    Tcp(u16),
    /// UDP port
    Udp(u16),
    /// HTTP port
    Http(u16),
    /// TCP port visible to the project only
    ProjectTcp(u16),
    /// UDP port visible to the project only
    ProjectUdp(u16),
}

/// Container entry command.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run with `sh`
    Sh(Vec<u8>),
    /// Run with `bash`
    Bash(Vec<u8>),
    /// Run with `zsh`
    Zsh(Vec<u8>),
    /// Image default
    None,
}

/// Environment entry kind.
#[derive(Encode, Decode, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvType {
    /// Environment variable
    Env,
    /// Mounted file
    File,
}

/// Environment entry supplied at create/update time.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct EnvInput {
    /// Entry kind
    pub etype: EnvType,
    /// Variable name or file path
    pub k: Vec<u8>,
    /// Value or file content
    pub v: Vec<u8>,
    /// Position of the entry
    pub index: u16,
}

/// Disk storage class.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub enum DiskClass {
    /// SSD volume mounted at the given path
    Ssd(Vec<u8>),
}

/// Disk requested by a workload.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct Disk {
    /// Storage class and mount path
    pub path: DiskClass,
    /// Size in GB
    pub size: u32,
}

/// Trusted execution environment flavour.
#[derive(Encode, Decode, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeeVersion {
    /// Intel SGX enclave
    Sgx,
    /// Confidential VM
    Cvm,
}

/// Price per resource unit for a given level.
#[derive(Encode, Decode, Clone, Debug, Default, PartialEq, Eq)]
pub struct Price {
    /// Per CPU core
    pub cpu_per: u128,
    /// Per confidential VM core
    pub cvm_cpu_per: u128,
    /// Per MB of memory
    pub memory_per: u128,
    /// Per MB of confidential VM memory
    pub cvm_memory_per: u128,
    /// Per GB of disk
    pub disk_per: u128,
    /// Per GPU
    pub gpu_per: u128,
}

/// Computing resources.
#[derive(Encode, Decode, Clone, Debug, Default, PartialEq, Eq)]
pub struct ComCr {
    /// CPU cores
    pub cpu: u32,
    /// Memory in MB
    pub mem: u32,
    /// Confidential VM cores
    pub cvm_cpu: u32,
    /// Confidential VM memory in MB
    pub cvm_mem: u32,
    /// Disk in GB
    pub disk: u32,
    /// GPUs
    pub gpu: u32,
}

/// Proof that a workload ran on a cluster.
#[derive(Encode, Decode, Clone, Debug, Default, PartialEq, Eq)]
pub struct ProofOfWork {
    /// Hash of the workload logs
    pub logs_hash: Vec<u8>,
    /// Consumed resources
    pub cr: ComCr,
    /// Public key of the workload
    pub public_key: Vec<u8>,
}

/// Settlement state of a workload contract.
#[derive(Encode, Decode, Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractState {
    /// Last settlement block
    pub block_number: BlockNumber,
    /// Minted amount
    pub minted: Balance,
    /// Withdrawn amount
    pub withdrawal: Balance,
    /// Hosting cluster
    pub cluster_id: u64,
}

/// Worker cluster record.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct K8sCluster {
    /// Cluster id
    pub id: u64,
    /// Owner account
    pub account: AccountId32,
    /// Registration block
    pub start_block: BlockNumber,
    /// Block the cluster stopped at
    pub stop_block: Option<BlockNumber>,
    /// Block the cluster was terminated at
    pub terminal_block: Option<BlockNumber>,
    /// Cluster name
    pub name: Vec<u8>,
    /// Public addresses
    pub ip: Vec<Ip>,
    /// Public port
    pub port: u32,
    /// Service level
    pub level: u8,
}

/// App, task or GPU workload record.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct TeeApp {
    /// Workload id
    pub id: u64,
    /// Creator account
    pub creator: AccountId32,
    /// Name
    pub name: Vec<u8>,
    /// Container image
    pub image: Vec<u8>,
    /// Free-form metadata
    pub meta: Vec<u8>,
    /// Exposed ports
    pub port: Vec<Service>,
    /// Entry command
    pub command: Command,
    /// Environment
    pub env: Vec<EnvInput>,
    /// CPU cores
    pub cpu: u32,
    /// Memory in MB
    pub memory: u32,
    /// Disks
    pub disk: Vec<Disk>,
    /// GPUs
    pub gpu: u32,
    /// Lifecycle status
    pub status: u8,
    /// Service level
    pub level: u8,
    /// TEE flavour
    pub tee_version: TeeVersion,
    /// Creation block
    pub start_block: BlockNumber,
}

/// Workload definition submitted by the `create` call of the app, task and
/// GPU pallets.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct WorkloadSpec {
    /// Name
    pub name: Vec<u8>,
    /// Container image
    pub image: Vec<u8>,
    /// Free-form metadata
    pub meta: Vec<u8>,
    /// Exposed ports
    pub port: Vec<Service>,
    /// Entry command
    pub command: Command,
    /// Environment
    pub env: Vec<EnvInput>,
    /// CPU cores
    pub cpu: u32,
    /// Memory in MB
    pub memory: u32,
    /// Disks
    pub disk: Vec<Disk>,
    /// GPUs
    pub gpu: u32,
    /// Service level
    pub level: u8,
    /// TEE flavour
    pub tee_version: TeeVersion,
    /// Deposit
    pub deposit: Balance,
}

/// Changes submitted by the `update` call of the app, task and GPU pallets.
///
/// `None` keeps the current value; `new_env` entries are applied by index.
///
/// ```
/// use wetee_client::types::WorkloadUpdate;
///
/// let update = WorkloadUpdate {
///     new_cpu: Some(2),
///     ..WorkloadUpdate::new(7)
/// };
/// assert_eq!(update.id, 7);
/// ```
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct WorkloadUpdate {
    /// Workload id within its pallet
    pub id: u64,
    /// New name
    pub new_name: Option<Vec<u8>>,
    /// New image
    pub new_image: Option<Vec<u8>>,
    /// New ports
    pub new_port: Option<Vec<Service>>,
    /// New entry command
    pub new_command: Option<Command>,
    /// Environment edits
    pub new_env: Vec<EnvInput>,
    /// New CPU cores
    pub new_cpu: Option<u32>,
    /// New memory in MB
    pub new_memory: Option<u32>,
    /// New GPUs
    pub new_gpu: Option<u32>,
}

impl WorkloadUpdate {
    /// Update of `id` that changes nothing.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            new_name: None,
            new_image: None,
            new_port: None,
            new_command: None,
            new_env: Vec::new(),
            new_cpu: None,
            new_memory: None,
            new_gpu: None,
        }
    }
}

/// Pending contract call routed to a TEE workload.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct TeeCall {
    /// Target workload
    pub work_id: WorkId,
    /// Calling account or contract
    pub caller: AccountId32,
    /// Method selector
    pub method: u16,
    /// Encoded parameters
    pub params: Vec<u8>,
    /// Encoded callback selector
    pub callback: Option<Vec<u8>>,
    /// Submission block
    pub block: BlockNumber,
}

/// XCMP queue thresholds.
#[derive(Encode, Decode, Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueueConfigData {
    /// Pages at which the channel is suspended
    pub suspend_threshold: u32,
    /// Pages at which messages are dropped
    pub drop_threshold: u32,
    /// Pages at which a suspended channel resumes
    pub resume_threshold: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_distinguishes_none_from_zero() {
        assert_eq!(None::<u32>.encode(), vec![0]);
        assert_eq!(Some(0u32).encode(), vec![1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_empty_update_layout() {
        let mut expected = 9u64.encode();
        // four `None`, empty env, three `None`
        expected.extend_from_slice(&[0; 8]);
        assert_eq!(WorkloadUpdate::new(9).encode(), expected);
    }

    #[test]
    fn test_work_id_layout() {
        assert_eq!(WorkId::task(1).encode(), vec![1, 1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(WorkId::gpu(2).wtype, WorkType::Gpu);
    }
}
