// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get access to everything `error_chain!` creates.
use error_chain::*;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        InvalidDimensions(reason: String) {
            description("invalid maze dimensions")
            display("invalid maze dimensions: {}", reason)
        }
        InvalidMaterial(name: String) {
            description("material cannot be rendered")
            display("material '{}' cannot be rendered", name)
        }
        UnknownAlgorithm(name: String) {
            description("unknown maze algorithm")
            display("unknown maze algorithm '{}', expected binary-tree, recursive-backtracking or recursive-division", name)
        }
        UnknownRecursion(name: String) {
            description("unknown recursion strategy")
            display("unknown recursion strategy '{}', expected auto, direct or stack", name)
        }
    }
}
