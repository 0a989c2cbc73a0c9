// Copyright (c) 2025 Pocketledger.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod currency;
pub mod doctor;
pub mod exporter;
pub mod goals;
pub mod reports;
pub mod transactions;
