//! Firewall configuration, shared by the cluster, node and guest levels.

use http::Method;
use serde::Serialize;
use serde_json::Value;

use pve_client::{ApiExecutor, Error};

use crate::macros::api_path;

api_path! {
    /// `.../firewall/` below `/cluster`, a node or a guest.
    pub struct Firewall;
}

impl<E: Clone> Firewall<E> {
    pub fn rules(&self) -> FirewallRules<E> {
        FirewallRules::from_node(self.node.child("rules"))
    }
}

impl<E: ApiExecutor> Firewall<E> {
    /// Directory index.
    pub fn get(&self) -> Result<Value, Error> {
        self.node.get()
    }

    /// Get firewall options.
    pub fn get_options(&self) -> Result<Value, Error> {
        self.node.call(Method::GET, "options", None::<&()>)
    }

    /// Set firewall options.
    pub fn put_options<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::PUT, "options", Some(params))
    }

    /// Read firewall log. Not available at the cluster level.
    pub fn get_log<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::GET, "log", Some(params))
    }

    /// Lists possible IPSet/Alias reference which are allowed in source/dest properties. Not
    /// available at the node level.
    pub fn get_refs<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::GET, "refs", Some(params))
    }
}

api_path! {
    /// `.../firewall/rules/`
    pub struct FirewallRules;
}

impl<E: Clone> FirewallRules<E> {
    /// Single rule, addressed by its position.
    pub fn pos(&self, pos: u32) -> FirewallRule<E> {
        FirewallRule::from_node(self.node.child(pos))
    }
}

impl<E: ApiExecutor> FirewallRules<E> {
    /// List rules.
    pub fn get(&self) -> Result<Value, Error> {
        self.node.get()
    }

    /// Create new rule.
    pub fn post<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.post(params)
    }
}

api_path! {
    /// `.../firewall/rules/{pos}/`
    pub struct FirewallRule;
}

impl<E: ApiExecutor> FirewallRule<E> {
    /// Get single rule data.
    pub fn get(&self) -> Result<Value, Error> {
        self.node.get()
    }

    /// Modify rule data.
    pub fn put<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.put(params)
    }

    /// Delete rule.
    pub fn delete<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.delete_with(params)
    }
}
