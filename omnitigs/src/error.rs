error_chain! {
    errors {
        /// A limit set in the search configuration was exceeded, so the search was aborted.
        SearchLimitExceeded(limit: String) {
            description("the omnitig search exceeded a configured limit")
            display("the omnitig search exceeded a configured limit: {}", limit)
        }

        /// The graph violates a precondition of the search.
        InvalidGraph(reason: String) {
            description("the input graph is not a valid directed multigraph")
            display("the input graph is not a valid directed multigraph: {}", reason)
        }
    }
}
