/*
    Test suite for the profile store facade

    Covers:
    - Init retry protocol and status lifecycle
    - Callback registration semantics
    - Lock-guarded CRUD and batch validation
    - Reader/writer exclusion
*/
