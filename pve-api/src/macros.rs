/// Declare an endpoint type: a thin wrapper around a [`PathNode`](crate::PathNode) positioned at
/// the endpoint's path. The verbs and child accessors are added in a separate `impl` block.
macro_rules! api_path {
    ($(#[$doc:meta])* $vis:vis struct $name:ident;) => {
        $(#[$doc])*
        #[derive(Clone, Debug)]
        $vis struct $name<E> {
            node: $crate::PathNode<E>,
        }

        impl<E> $name<E> {
            /// Wrap a node positioned at this endpoint.
            pub fn from_node(node: $crate::PathNode<E>) -> Self {
                Self { node }
            }

            /// The composed path, always ending in `/`.
            pub fn path(&self) -> &str {
                self.node.path()
            }

            /// The generic node, for operations without a dedicated method.
            pub fn path_node(&self) -> &$crate::PathNode<E> {
                &self.node
            }
        }
    };
}

pub(crate) use api_path;
