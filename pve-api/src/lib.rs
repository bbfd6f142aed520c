//! Typed path tree for the Proxmox VE REST API.
//!
//! Every endpoint type wraps a [`PathNode`]: its absolute path and a handle to an
//! [`ApiExecutor`]. Accessors such as [`Nodes::node`](nodes::Nodes::node) only compose paths,
//! the verb methods (`get`, `put`, `post`, `delete` and the suffixed `get_status` style
//! variants) forward exactly one call to the executor and hand its result back unchanged.
//!
//! ```no_run
//! # fn main() -> Result<(), pve_api::Error> {
//! use pve_api::PveApi;
//! use pve_api::types::{RrdParams, RrdTimeframe};
//! use pve_client::{Client, StaticAuth, Token};
//!
//! let auth = StaticAuth::with_token(Token::new("root@pam!monitoring", "secret"));
//! let client = Client::new("https://pve1.example.com:8006", auth)?;
//! let api = PveApi::new(&client);
//!
//! let vm = api.nodes().node("pve1").qemu().vmid(100);
//! let status = vm.status().get_current()?;
//! println!("{}", status["status"]);
//!
//! let png = vm
//!     .rrd()
//!     .get_with(&RrdParams::new(RrdTimeframe::Hour).ds(["cpu"]))?;
//! std::fs::write("cpu.png", png).expect("write graph");
//! # Ok(())
//! # }
//! ```

use http::Method;
use serde_json::Value;

pub use pve_client::{ApiExecutor, ApiResponse, Error, ResponseFormat};

mod macros;
use macros::api_path;

mod path;
pub use path::{join_path, PathNode, SEPARATOR};

pub mod access;
pub mod cluster;
pub mod firewall;
pub mod nodes;
pub mod types;

api_path! {
    /// The root of the API, `/`.
    pub struct PveApi;
}

impl<E> PveApi<E> {
    /// Root of the tree. All descendants share (clones of) `executor`.
    pub fn new(executor: E) -> Self {
        Self::from_node(PathNode::root(executor))
    }
}

impl<E: Clone> PveApi<E> {
    pub fn access(&self) -> access::Access<E> {
        access::Access::from_node(self.node.child("access"))
    }

    pub fn cluster(&self) -> cluster::Cluster<E> {
        cluster::Cluster::from_node(self.node.child("cluster"))
    }

    pub fn nodes(&self) -> nodes::Nodes<E> {
        nodes::Nodes::from_node(self.node.child("nodes"))
    }
}

impl<E: ApiExecutor> PveApi<E> {
    /// API version details, including some parts of the global datacenter config.
    pub fn get_version(&self) -> Result<Value, Error> {
        self.node.call(Method::GET, "version", None::<&()>)
    }
}
