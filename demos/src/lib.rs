// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Bramble workspace. See the `examples/` directory.
