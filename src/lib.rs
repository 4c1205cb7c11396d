pub mod consts {
    pub mod consts;
}

pub mod model {
    pub mod person;
}

pub mod directory {
    pub mod directory;
    pub mod options;
    pub mod shared;
}

pub mod stats {
    pub mod average;
}

pub mod loader {
    pub mod loader;
}
