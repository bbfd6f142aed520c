//! `/access`: users, groups, roles, realms and the ACL.

use http::Method;
use serde::Serialize;
use serde_json::Value;

use pve_client::{ApiExecutor, Error};

use crate::macros::api_path;

api_path! {
    /// `/access/`
    pub struct Access;
}

impl<E: Clone> Access<E> {
    /// Authentication domain index.
    pub fn domains(&self) -> Domains<E> {
        Domains::from_node(self.node.child("domains"))
    }

    /// Group index.
    pub fn groups(&self) -> Groups<E> {
        Groups::from_node(self.node.child("groups"))
    }

    /// Role index.
    pub fn roles(&self) -> Roles<E> {
        Roles::from_node(self.node.child("roles"))
    }

    /// User index.
    pub fn users(&self) -> Users<E> {
        Users::from_node(self.node.child("users"))
    }
}

impl<E: ApiExecutor> Access<E> {
    /// Directory index.
    pub fn get(&self) -> Result<Value, Error> {
        self.node.get()
    }

    /// Get Access Control List (ACLs).
    pub fn get_acl(&self) -> Result<Value, Error> {
        self.node.call(Method::GET, "acl", None::<&()>)
    }

    /// Retrieve effective permissions of given user/token.
    pub fn get_permissions<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::GET, "permissions", Some(params))
    }

    /// Update Access Control List (add or remove permissions).
    pub fn put_acl<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::PUT, "acl", Some(params))
    }

    /// Change user password.
    pub fn put_password<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::PUT, "password", Some(params))
    }

    /// Change user u2f authentication.
    pub fn put_tfa<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::PUT, "tfa", Some(params))
    }

    /// Finish a u2f challenge.
    pub fn post_tfa<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::POST, "tfa", Some(params))
    }

    /// Create or verify authentication ticket.
    ///
    /// The returned data can be turned into credentials with
    /// [`TicketAuth::from_ticket_response`](pve_client::TicketAuth::from_ticket_response).
    pub fn post_ticket<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::POST, "ticket", Some(params))
    }
}

/// Collections below `/access` share their shape: list, create, and an item with
/// read/update/delete.
macro_rules! access_collection {
    (
        $(#[$doc:meta])* $collection:ident,
        $(#[$item_doc:meta])* $item:ident,
        $accessor:ident($id:ident)
    ) => {
        api_path! {
            $(#[$doc])*
            pub struct $collection;
        }

        api_path! {
            $(#[$item_doc])*
            pub struct $item;
        }

        impl<E: Clone> $collection<E> {
            pub fn $accessor(&self, $id: &str) -> $item<E> {
                $item::from_node(self.node.child($id))
            }
        }

        impl<E: ApiExecutor> $collection<E> {
            pub fn get(&self) -> Result<Value, Error> {
                self.node.get()
            }

            pub fn post<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
                self.node.post(params)
            }
        }

        impl<E: ApiExecutor> $item<E> {
            pub fn get(&self) -> Result<Value, Error> {
                self.node.get()
            }

            pub fn put<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
                self.node.put(params)
            }

            pub fn delete(&self) -> Result<Value, Error> {
                self.node.delete()
            }
        }
    };
}

access_collection! {
    /// `/access/domains/`
    Domains,
    /// `/access/domains/{realm}/`
    Domain,
    realm(realm)
}

access_collection! {
    /// `/access/groups/`
    Groups,
    /// `/access/groups/{groupid}/`
    Group,
    group(groupid)
}

access_collection! {
    /// `/access/roles/`
    Roles,
    /// `/access/roles/{roleid}/`
    Role,
    role(roleid)
}

access_collection! {
    /// `/access/users/`
    Users,
    /// `/access/users/{userid}/`
    User,
    user(userid)
}

impl<E: ApiExecutor> Domain<E> {
    /// Sync users and/or groups from the configured LDAP/AD realm.
    pub fn post_sync<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::POST, "sync", Some(params))
    }
}

impl<E: ApiExecutor> User<E> {
    /// Get user TFA types (Personal and Realm).
    pub fn get_tfa(&self) -> Result<Value, Error> {
        self.node.call(Method::GET, "tfa", None::<&()>)
    }

    /// Get user API tokens.
    pub fn get_token(&self) -> Result<Value, Error> {
        self.node.call(Method::GET, "token", None::<&()>)
    }
}
