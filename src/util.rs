use crate::token::Function;
use hashbrown::HashMap;

lazy_static! {
    /// Functions callable from an expression, by name
    pub static ref FUNCTIONS: HashMap<&'static str, Function> = {
        let mut map = HashMap::new();
        for func in [
            Function::Log,
            Function::Ln,
            Function::Sin,
            Function::Cos,
            Function::Tan,
            Function::Sqrt,
        ] {
            map.insert(func.name(), func);
        }
        map.shrink_to_fit();
        map
    };
}
