use http::Method;
use serde::Serialize;
use serde_json::Value;

use pve_client::{ApiExecutor, Error};

use super::guest::{GuestStatus, Rrd};
use crate::firewall::Firewall;
use crate::macros::api_path;

api_path! {
    /// `/nodes/{node}/qemu/`
    pub struct Qemu;
}

impl<E: Clone> Qemu<E> {
    pub fn vmid(&self, vmid: u32) -> QemuVm<E> {
        QemuVm::from_node(self.node.child(vmid))
    }
}

impl<E: ApiExecutor> Qemu<E> {
    /// Virtual machine index (per node).
    pub fn get<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.get_with(params)
    }

    /// Create or restore a virtual machine.
    pub fn post<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.post(params)
    }
}

api_path! {
    /// `/nodes/{node}/qemu/{vmid}/`
    pub struct QemuVm;
}

impl<E: Clone> QemuVm<E> {
    pub fn rrd(&self) -> Rrd<E> {
        Rrd::from_node(self.node.child("rrd"))
    }

    pub fn status(&self) -> GuestStatus<E> {
        GuestStatus::from_node(self.node.child("status"))
    }

    pub fn firewall(&self) -> Firewall<E> {
        Firewall::from_node(self.node.child("firewall"))
    }
}

impl<E: ApiExecutor> QemuVm<E> {
    /// Directory index.
    pub fn get(&self) -> Result<Value, Error> {
        self.node.get()
    }

    /// Destroy the VM and all used/owned volumes.
    pub fn delete<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.delete_with(params)
    }

    /// Get the virtual machine configuration with pending changes applied. Set the `current`
    /// parameter to get the current configuration instead.
    pub fn get_config<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::GET, "config", Some(params))
    }

    /// Set virtual machine options (asynchronous API).
    pub fn post_config<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::POST, "config", Some(params))
    }

    /// Set virtual machine options (synchronous API).
    pub fn put_config<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::PUT, "config", Some(params))
    }

    /// Get the virtual machine configuration with both current and pending values.
    pub fn get_pending(&self) -> Result<Value, Error> {
        self.node.call(Method::GET, "pending", None::<&()>)
    }

    /// Read VM RRD statistics.
    pub fn get_rrddata<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::GET, "rrddata", Some(params))
    }
}
