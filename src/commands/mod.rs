// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod list;
pub mod stats;
pub mod show;
pub mod pay;
pub mod edit;
pub mod exporter;
pub mod check;
