//! `/cluster`: cluster wide state, the cluster firewall and ceph flags.

use http::Method;
use serde::Serialize;
use serde_json::Value;

use pve_client::{ApiExecutor, Error};

use crate::firewall::Firewall;
use crate::macros::api_path;

api_path! {
    /// `/cluster/`
    pub struct Cluster;
}

impl<E: Clone> Cluster<E> {
    pub fn firewall(&self) -> Firewall<E> {
        Firewall::from_node(self.node.child("firewall"))
    }

    pub fn ceph(&self) -> ClusterCeph<E> {
        ClusterCeph::from_node(self.node.child("ceph"))
    }
}

impl<E: ApiExecutor> Cluster<E> {
    /// Cluster index.
    pub fn get(&self) -> Result<Value, Error> {
        self.node.get()
    }

    /// Resources index (cluster wide), see [`ClusterResources`](crate::types::ClusterResources).
    pub fn get_resources<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::GET, "resources", Some(params))
    }

    /// Get cluster status information.
    pub fn get_status(&self) -> Result<Value, Error> {
        self.node.call(Method::GET, "status", None::<&()>)
    }

    /// Get next free VMID, or check whether the one passed as `vmid` is free.
    pub fn get_nextid<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::GET, "nextid", Some(params))
    }

    /// List recent tasks (cluster wide).
    pub fn get_tasks(&self) -> Result<Value, Error> {
        self.node.call(Method::GET, "tasks", None::<&()>)
    }

    /// Read cluster log.
    pub fn get_log<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::GET, "log", Some(params))
    }
}

api_path! {
    /// `/cluster/ceph/`
    pub struct ClusterCeph;
}

impl<E: Clone> ClusterCeph<E> {
    pub fn flags(&self) -> CephFlags<E> {
        CephFlags::from_node(self.node.child("flags"))
    }
}

impl<E: ApiExecutor> ClusterCeph<E> {
    pub fn get(&self) -> Result<Value, Error> {
        self.node.get()
    }

    /// Get ceph status.
    pub fn get_status(&self) -> Result<Value, Error> {
        self.node.call(Method::GET, "status", None::<&()>)
    }

    /// Get ceph metadata.
    pub fn get_metadata<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::GET, "metadata", Some(params))
    }
}

api_path! {
    /// `/cluster/ceph/flags/`
    pub struct CephFlags;
}

impl<E: Clone> CephFlags<E> {
    pub fn flag(&self, flag: &str) -> CephFlag<E> {
        CephFlag::from_node(self.node.child(flag))
    }
}

impl<E: ApiExecutor> CephFlags<E> {
    /// Get the status of all ceph flags.
    pub fn get(&self) -> Result<Value, Error> {
        self.node.get()
    }

    /// Set/Unset multiple ceph flags at once.
    pub fn put<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.put(params)
    }
}

api_path! {
    /// `/cluster/ceph/flags/{flag}/`
    pub struct CephFlag;
}

impl<E: ApiExecutor> CephFlag<E> {
    /// Get the status of a specific ceph flag.
    pub fn get(&self) -> Result<Value, Error> {
        self.node.get()
    }

    /// Set or clear (unset) a specific ceph flag.
    pub fn put<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.put(params)
    }
}
