//! `/nodes`: per node state and the guests living on it.

use http::Method;
use serde::Serialize;
use serde_json::Value;

use pve_client::{ApiExecutor, Error};

use crate::firewall::Firewall;
use crate::macros::api_path;

mod ceph;
mod guest;
mod lxc;
mod qemu;

pub use ceph::{Ceph, CephCfg};
pub use guest::{GuestStatus, Rrd};
pub use lxc::{Lxc, LxcVm, Termproxy};
pub use qemu::{Qemu, QemuVm};

api_path! {
    /// `/nodes/`
    pub struct Nodes;
}

impl<E: Clone> Nodes<E> {
    pub fn node(&self, node: &str) -> Node<E> {
        Node::from_node(self.node.child(node))
    }
}

impl<E: ApiExecutor> Nodes<E> {
    /// Cluster node index.
    pub fn get(&self) -> Result<Value, Error> {
        self.node.get()
    }
}

api_path! {
    /// `/nodes/{node}/`
    pub struct Node;
}

impl<E: Clone> Node<E> {
    /// Virtual machines on this node.
    pub fn qemu(&self) -> Qemu<E> {
        Qemu::from_node(self.node.child("qemu"))
    }

    /// Containers on this node.
    pub fn lxc(&self) -> Lxc<E> {
        Lxc::from_node(self.node.child("lxc"))
    }

    pub fn ceph(&self) -> Ceph<E> {
        Ceph::from_node(self.node.child("ceph"))
    }

    pub fn firewall(&self) -> Firewall<E> {
        Firewall::from_node(self.node.child("firewall"))
    }
}

impl<E: ApiExecutor> Node<E> {
    /// Node index.
    pub fn get(&self) -> Result<Value, Error> {
        self.node.get()
    }

    /// Read node status.
    pub fn get_status(&self) -> Result<Value, Error> {
        self.node.call(Method::GET, "status", None::<&()>)
    }

    /// Reboot or shutdown a node, selected by the `command` parameter.
    pub fn post_status<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::POST, "status", Some(params))
    }

    /// API version details of this node.
    pub fn get_version(&self) -> Result<Value, Error> {
        self.node.call(Method::GET, "version", None::<&()>)
    }

    /// Read system log.
    pub fn get_syslog<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::GET, "syslog", Some(params))
    }

    /// Read task list for one node (finished tasks).
    pub fn get_tasks<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::GET, "tasks", Some(params))
    }
}
