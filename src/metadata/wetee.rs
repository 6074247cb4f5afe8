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
//! Wetee runtime registry.
//!
//! Must be kept in sync with the call enums in [`crate::runtime`]; any
//! runtime upgrade that renames, reorders or re-indexes items needs both
//! updated together.

use super::{
    ArgMetadata, CallMetadata, Metadata, PalletMetadata, StorageEntryMetadata, StorageHasher,
    StorageModifier,
};
use StorageHasher::{Blake2_128Concat, Twox64Concat};

pub const SPEC_VERSION: u32 = 129;

const CREATE_ARGS: &[(&str, &str)] = &[
    ("name", "Vec<u8>"),
    ("image", "Vec<u8>"),
    ("meta", "Vec<u8>"),
    ("port", "Vec<Service>"),
    ("command", "Command"),
    ("env", "Vec<EnvInput>"),
    ("cpu", "u32"),
    ("memory", "u32"),
    ("disk", "Vec<Disk>"),
    ("gpu", "u32"),
    ("level", "u8"),
    ("tee_version", "TeeVersion"),
    ("deposit", "u128"),
];

const UPDATE_OPTIONS: &[(&str, &str)] = &[
    ("new_name", "Option<Vec<u8>>"),
    ("new_image", "Option<Vec<u8>>"),
    ("new_port", "Option<Vec<Service>>"),
    ("new_command", "Option<Command>"),
    ("new_env", "Vec<EnvInput>"),
    ("new_cpu", "Option<u32>"),
    ("new_memory", "Option<u32>"),
    ("new_gpu", "Option<u32>"),
];

struct Pallet(PalletMetadata);

impl Pallet {
    fn new(name: &str, index: u8) -> Self {
        Pallet(PalletMetadata {
            name: name.into(),
            index,
            calls: Vec::new(),
            storage: Vec::new(),
        })
    }

    fn call(mut self, index: u8, name: &str, args: &[(&str, &str)]) -> Self {
        self.0.calls.push(CallMetadata {
            name: name.into(),
            index,
            args: args
                .iter()
                .map(|(name, ty)| ArgMetadata {
                    name: (*name).into(),
                    ty: (*ty).into(),
                })
                .collect(),
        });
        self
    }

    fn update_call(self, index: u8, id_arg: &str) -> Self {
        let mut args = vec![(id_arg, "u64")];
        args.extend_from_slice(UPDATE_OPTIONS);
        self.call(index, "update", &args)
    }

    fn value(self, name: &str, value_ty: &str, default: &[u8]) -> Self {
        self.entry(name, StorageModifier::Default, &[], value_ty, default)
    }

    fn optional(self, name: &str, keys: &[(StorageHasher, &str)], value_ty: &str) -> Self {
        self.entry(name, StorageModifier::Optional, keys, value_ty, &[])
    }

    fn entry(
        mut self,
        name: &str,
        modifier: StorageModifier,
        keys: &[(StorageHasher, &str)],
        value_ty: &str,
        default: &[u8],
    ) -> Self {
        self.0.storage.push(StorageEntryMetadata {
            name: name.into(),
            modifier,
            hashers: keys.iter().map(|(h, _)| *h).collect(),
            key_ty: keys.iter().map(|(_, ty)| (*ty).into()).collect(),
            value_ty: value_ty.into(),
            default: default.to_vec(),
        });
        self
    }

    fn price_calls(self, update_price: u8, charge: u8) -> Self {
        self.call(
            update_price,
            "update_price",
            &[("level", "u8"), ("price", "Price")],
        )
        .call(charge, "charge", &[("id", "u64"), ("deposit", "u128")])
    }
}

pub fn metadata() -> Metadata {
    let pallets = vec![
        Pallet::new("System", 0)
            .call(0, "remark", &[("remark", "Vec<u8>")])
            .call(7, "remark_with_event", &[("remark", "Vec<u8>")])
            .value("Number", "u32", &[0; 4])
            .entry(
                "BlockHash",
                StorageModifier::Default,
                &[(Twox64Concat, "u32")],
                "H256",
                &[0; 32],
            )
            .optional("ExtrinsicCount", &[], "u32"),
        Pallet::new("Timestamp", 2)
            .call(0, "set", &[("now", "Compact<u64>")])
            .value("Now", "u64", &[0; 8]),
        Pallet::new("ParachainInfo", 3).value("ParachainId", "u32", &[0x64, 0, 0, 0]),
        Pallet::new("Balances", 10)
            .call(
                0,
                "transfer_allow_death",
                &[("dest", "MultiAddress"), ("value", "Compact<u128>")],
            )
            .call(
                3,
                "transfer_keep_alive",
                &[("dest", "MultiAddress"), ("value", "Compact<u128>")],
            )
            .value("TotalIssuance", "u128", &[0; 16]),
        Pallet::new("Aura", 23)
            .value("Authorities", "Vec<[u8; 32]>", &[0])
            .value("CurrentSlot", "u64", &[0; 8]),
        Pallet::new("XcmpQueue", 30)
            .call(1, "suspend_xcm_execution", &[])
            .call(2, "resume_xcm_execution", &[])
            .call(3, "update_suspend_threshold", &[("new", "u32")])
            .call(4, "update_drop_threshold", &[("new", "u32")])
            .call(5, "update_resume_threshold", &[("new", "u32")])
            .value("QueueSuspended", "bool", &[0])
            .value(
                "QueueConfig",
                "QueueConfigData",
                &[32, 0, 0, 0, 48, 0, 0, 0, 8, 0, 0, 0],
            ),
        Pallet::new("WeteeWorker", 50)
            .call(
                0,
                "cluster_register",
                &[
                    ("name", "Vec<u8>"),
                    ("ip", "Vec<Ip>"),
                    ("port", "u32"),
                    ("level", "u8"),
                ],
            )
            .call(
                1,
                "cluster_mortgage",
                &[
                    ("id", "u64"),
                    ("cpu", "u32"),
                    ("mem", "u32"),
                    ("cvm_cpu", "u32"),
                    ("cvm_mem", "u32"),
                    ("disk", "u32"),
                    ("gpu", "u32"),
                    ("deposit", "u128"),
                ],
            )
            .call(
                2,
                "cluster_unmortgage",
                &[("id", "u64"), ("block_num", "u32")],
            )
            .call(
                3,
                "cluster_withdrawal",
                &[("id", "WorkId"), ("val", "u128")],
            )
            .call(4, "cluster_stop", &[("id", "u64")])
            .call(
                5,
                "cluster_report",
                &[
                    ("cluster_id", "u64"),
                    ("work_id", "WorkId"),
                    ("reason", "Vec<u8>"),
                ],
            )
            .call(
                6,
                "report_close",
                &[("cluster_id", "u64"), ("work_id", "WorkId")],
            )
            .call(
                7,
                "work_proof_upload",
                &[
                    ("work_id", "WorkId"),
                    ("proof", "Option<ProofOfWork>"),
                    ("report", "Option<Vec<u8>>"),
                ],
            )
            .value("NextClusterId", "u64", &[0; 8])
            .optional("K8sClusters", &[(Twox64Concat, "u64")], "K8sCluster")
            .optional(
                "K8sClusterAccounts",
                &[(Blake2_128Concat, "AccountId32")],
                "u64",
            )
            .optional("WorkContracts", &[(Twox64Concat, "WorkId")], "ContractState")
            .optional(
                "ProofsOfWork",
                &[(Twox64Concat, "WorkId"), (Twox64Concat, "u32")],
                "ProofOfWork",
            ),
        Pallet::new("WeteeApp", 51)
            .call(0, "create", CREATE_ARGS)
            .update_call(1, "app_id")
            .call(2, "restart", &[("app_id", "u64")])
            .call(3, "stop", &[("app_id", "u64")])
            .price_calls(4, 5)
            .value("NextTeeId", "u64", &[0; 8])
            .optional(
                "TEEApps",
                &[(Blake2_128Concat, "AccountId32"), (Twox64Concat, "u64")],
                "TeeApp",
            )
            .optional("AppIdAccounts", &[(Twox64Concat, "u64")], "AccountId32")
            .optional("Prices", &[(Twox64Concat, "u8")], "Price"),
        Pallet::new("WeteeTask", 52)
            .call(0, "create", CREATE_ARGS)
            .update_call(1, "task_id")
            .call(2, "rerun", &[("id", "u64")])
            .price_calls(3, 4)
            .value("NextTeeId", "u64", &[0; 8])
            .optional(
                "TEETasks",
                &[(Blake2_128Concat, "AccountId32"), (Twox64Concat, "u64")],
                "TeeApp",
            )
            .optional("TaskIdAccounts", &[(Twox64Concat, "u64")], "AccountId32")
            .optional("Prices", &[(Twox64Concat, "u8")], "Price"),
        Pallet::new("WeteeGpu", 53)
            .call(0, "create", CREATE_ARGS)
            .update_call(1, "app_id")
            .call(2, "restart", &[("app_id", "u64")])
            .call(3, "stop", &[("app_id", "u64")])
            .price_calls(4, 5)
            .value("NextAppId", "u64", &[0; 8])
            .optional(
                "GPUApps",
                &[(Blake2_128Concat, "AccountId32"), (Twox64Concat, "u64")],
                "TeeApp",
            )
            .optional("AppIdAccounts", &[(Twox64Concat, "u64")], "AccountId32")
            .optional("Prices", &[(Twox64Concat, "u8")], "Price"),
        Pallet::new("WeteeDsecret", 54)
            .call(0, "register_node", &[("pubkey", "[u8; 32]")])
            .call(
                1,
                "upload_code_mrenclave",
                &[("mrenclave", "Vec<u8>"), ("mrsigner", "Vec<u8>")],
            )
            .value("NextNodeId", "u64", &[0; 8])
            .optional("Nodes", &[(Twox64Concat, "u64")], "[u8; 32]")
            .value("CodeMrenclave", "Vec<u8>", &[0])
            .value("CodeMrsigner", "Vec<u8>", &[0]),
        Pallet::new("WeteeBridge", 55)
            .call(
                0,
                "call_tee",
                &[
                    ("work_id", "WorkId"),
                    ("method", "u16"),
                    ("params", "Vec<u8>"),
                    ("callback", "Option<Vec<u8>>"),
                ],
            )
            .call(1, "respond", &[("call_id", "u128"), ("result", "Vec<u8>")])
            .value("NextTeeCallId", "u128", &[0; 16])
            .optional("TEECalls", &[(Twox64Concat, "u128")], "TeeCall"),
    ];

    Metadata {
        spec_version: SPEC_VERSION,
        pallets: pallets.into_iter().map(|p| p.0).collect(),
    }
}
