mod result_ext;
