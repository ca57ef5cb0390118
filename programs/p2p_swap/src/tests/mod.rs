mod derivation;
